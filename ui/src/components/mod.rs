mod catalog_app;
mod catalog_list;
mod nav_host;

pub use catalog_app::CatalogApp;
pub use catalog_list::{CatalogList, CatalogListItem};
pub use nav_host::CatalogNavHost;
