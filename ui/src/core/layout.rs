//! Adaptive list/detail layout policy.
//!
//! Pure functions of (current route, width class); the shell component only
//! renders what these return.

use super::config::ShellConfig;
use super::window::{is_expanded_screen, WidthClass};
use crate::nav::ROOT_ROUTE;

/// What the shell shows for a given route and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellLayout {
    /// Compact screen on the root route: the catalog list at full size.
    ListOnly,
    /// Compact screen on a destination: its content at full size.
    ContentOnly,
    /// Expanded screen: list and content side by side. The list animates
    /// towards `list_fraction_target` of the width.
    SideBySide { list_fraction_target: f32 },
}

/// Width fraction the catalog list should settle at on an expanded screen.
pub fn list_width_target(is_root: bool, config: &ShellConfig) -> f32 {
    if is_root {
        1.0
    } else {
        config.list_min_width_fraction
    }
}

pub fn shell_layout(current_route: &str, width_class: WidthClass, config: &ShellConfig) -> ShellLayout {
    let is_root = current_route == ROOT_ROUTE;
    if is_expanded_screen(width_class) {
        ShellLayout::SideBySide {
            list_fraction_target: list_width_target(is_root, config),
        }
    } else if is_root {
        ShellLayout::ListOnly
    } else {
        ShellLayout::ContentOnly
    }
}
