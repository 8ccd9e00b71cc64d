//! Shared UI crate for Catalog. The adaptive navigation shell and every
//! destination screen live here; platform crates only launch `CatalogApp`.

pub mod core;
pub mod hooks;
pub mod i18n;
pub mod nav;
pub mod sensors;
pub mod views;

pub mod components;
pub use components::CatalogApp;

/// Shared theme, inlined by every platform with `document::Style`.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
