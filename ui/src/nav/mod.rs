//! Destination catalog and back-stack navigation.

mod back_stack;
mod destination;
mod navigator;

pub use back_stack::{BackStack, BackStackEntry};
pub use destination::{find_item, is_registered, CatalogItem, CATALOG, COMPASS_ROUTE, ROOT_ROUTE};
pub use navigator::{NavError, Navigator, ScreenState};
