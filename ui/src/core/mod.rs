//! Platform-agnostic shell logic: configuration, width classes, layout policy,
//! list-width animation and timing.

pub mod animation;
pub mod config;
pub mod layout;
pub mod timing;
pub mod window;
