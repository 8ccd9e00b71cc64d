/// Route of the landing destination showing the catalog list.
pub const ROOT_ROUTE: &str = "root_route";

/// Route of the compass destination.
pub const COMPASS_ROUTE: &str = "compass_route";

/// Every destination reachable from the catalog list, along with what is
/// needed to display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogItem {
    Compass,
}

/// Ordered catalog shown by the list.
pub const CATALOG: &[CatalogItem] = &[CatalogItem::Compass];

impl CatalogItem {
    pub fn route(self) -> &'static str {
        match self {
            CatalogItem::Compass => COMPASS_ROUTE,
        }
    }

    /// Fluent message id of the title.
    pub fn title_key(self) -> &'static str {
        match self {
            CatalogItem::Compass => "compass-route-label",
        }
    }

    /// Localized title.
    pub fn title(self) -> String {
        match self {
            CatalogItem::Compass => crate::t!("compass-route-label"),
        }
    }

    /// Icon asset shown in the list, if any.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            CatalogItem::Compass => None,
        }
    }

    /// Icon shown while the item is selected. Only used when [`Self::icon`]
    /// is set too.
    pub fn selected_icon(self) -> Option<&'static str> {
        match self {
            CatalogItem::Compass => None,
        }
    }
}

pub fn find_item(route: &str) -> Option<CatalogItem> {
    CATALOG.iter().copied().find(|item| item.route() == route)
}

/// Whether `route` is a known destination (root included).
pub fn is_registered(route: &str) -> bool {
    route == ROOT_ROUTE || find_item(route).is_some()
}
