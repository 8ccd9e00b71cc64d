use dioxus::prelude::*;

use crate::nav::{find_item, CatalogItem, Navigator};
use crate::views::{CompassRoute, RootRoute};

/// Renders the destination on top of the back-stack.
///
/// The host is the same for every layout; it is up to each destination to
/// adapt to `is_expanded_screen`.
#[component]
pub fn CatalogNavHost(is_expanded_screen: bool) -> Element {
    let navigator = use_context::<Signal<Navigator>>();
    let route = navigator.read().current_route();

    let content = match find_item(route) {
        None => rsx! { RootRoute { is_expanded_screen } },
        Some(CatalogItem::Compass) => rsx! { CompassRoute { is_expanded_screen } },
    };

    rsx! {
        main { class: "catalog-app__content", key: "{route}", {content} }
    }
}
