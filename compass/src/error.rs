use thiserror::Error;

/// Errors raised by sensor backends and compass configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompassError {
    /// The device lacks the required sensors, or access was denied.
    #[error("motion sensors unavailable: {reason}")]
    SensorUnavailable { reason: String },

    #[error("invalid compass configuration: {0}")]
    InvalidConfig(String),
}

impl CompassError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::SensorUnavailable {
            reason: reason.into(),
        }
    }
}
