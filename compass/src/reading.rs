//! Reading types published by the compass.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A compass heading in degrees, always within `[0, 360)`.
///
/// `0` means due North and `90` due East.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Heading(f32);

impl Heading {
    pub const NORTH: Heading = Heading(0.0);

    /// Normalize any finite angle into `[0, 360)`. Returns `None` for NaN or
    /// infinite input.
    pub fn from_degrees(degrees: f32) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }
        let mut wrapped = degrees.rem_euclid(360.0);
        // rem_euclid rounds tiny negative values up to exactly 360.0.
        if wrapped >= 360.0 {
            wrapped = 0.0;
        }
        Some(Self(wrapped))
    }

    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Signed shortest rotation from `self` to `other`, in `(-180, 180]`.
    pub fn delta_to(self, other: Heading) -> f32 {
        let diff = (other.0 - self.0).rem_euclid(360.0);
        if diff > 180.0 {
            diff - 360.0
        } else {
            diff
        }
    }

    /// Eight-wind cardinal label ("N", "NE", ... "NW").
    pub fn cardinal(self) -> &'static str {
        const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
        let sector = ((self.0 + 22.5) / 45.0).floor() as usize % POINTS.len();
        POINTS[sector]
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole degrees; 359.5 and up reads as 0, never 360.
        write!(f, "{:.0}°", self.0.round() % 360.0)
    }
}

impl TryFrom<f32> for Heading {
    type Error = String;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Heading::from_degrees(value).ok_or_else(|| format!("heading {value} is not finite"))
    }
}

impl From<Heading> for f32 {
    fn from(value: Heading) -> Self {
        value.0
    }
}

/// Coarse classification of how the device is being held.
///
/// This is independent from the screen orientation: a `Portrait` position does
/// not mean the app is currently laid out in portrait mode, only that the
/// device axes may have been switched by a tilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Pitch and roll are both within the tilt threshold.
    Flat,
    /// Pitch (rotation about the x axis) exceeds the threshold.
    Portrait,
    /// Roll (rotation about the y axis) exceeds the threshold.
    Landscape,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Flat => "flat",
            Position::Portrait => "portrait",
            Position::Landscape => "landscape",
        }
    }
}
