//! Window width classification.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive, in dp) of the compact width class.
pub const COMPACT_MAX_WIDTH_DP: f64 = 600.0;
/// Upper bound (exclusive, in dp) of the medium width class.
pub const MEDIUM_MAX_WIDTH_DP: f64 = 840.0;

/// Coarse classification of the available display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthClass {
    #[default]
    Compact,
    Medium,
    Expanded,
}

impl WidthClass {
    /// Classify a measured width in density-independent pixels.
    pub fn from_width_dp(width: f64) -> Self {
        if width < COMPACT_MAX_WIDTH_DP {
            WidthClass::Compact
        } else if width < MEDIUM_MAX_WIDTH_DP {
            WidthClass::Medium
        } else {
            WidthClass::Expanded
        }
    }
}

/// Whether list and content are shown side by side. Medium and expanded
/// widths are treated alike.
pub fn is_expanded_screen(width_class: WidthClass) -> bool {
    width_class != WidthClass::Compact
}
