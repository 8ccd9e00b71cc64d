use dioxus::prelude::*;

use crate::nav::{CatalogItem, Navigator, CATALOG};
use crate::t;

/// The list of every catalog destination. It drives navigation the way a
/// drawer or bottom bar would.
///
/// Expects a `Signal<Navigator>` in context (provided by `CatalogApp`).
#[component]
pub fn CatalogList(#[props(default)] style: String) -> Element {
    let mut navigator = use_context::<Signal<Navigator>>();
    let entries: Vec<(CatalogItem, bool)> = {
        let nav = navigator.read();
        CATALOG
            .iter()
            .map(|item| (*item, nav.is_selected(*item)))
            .collect()
    };

    rsx! {
        nav {
            class: "catalog-list",
            style: "{style}",
            aria_label: t!("catalog-list-label"),
            ul { class: "catalog-list__items",
                for (item, selected) in entries {
                    CatalogListItem {
                        key: "{item.route()}",
                        item,
                        selected,
                        onselect: move |item: CatalogItem| {
                            tracing::debug!(route = item.route(), "catalog item selected");
                            navigator.write().select_item(item);
                        },
                    }
                }
            }
        }
    }
}

/// One catalog destination. Shows the selected icon variant, when the item
/// has one, while selected.
#[component]
pub fn CatalogListItem(item: CatalogItem, selected: bool, onselect: EventHandler<CatalogItem>) -> Element {
    let icon = match (item.icon(), item.selected_icon()) {
        (Some(_), Some(selected_icon)) if selected => Some(selected_icon),
        (icon, _) => icon,
    };
    let title = item.title();
    let class = if selected {
        "catalog-list__item catalog-list__item--selected"
    } else {
        "catalog-list__item"
    };
    let aria_current = if selected { "page" } else { "false" };

    rsx! {
        li {
            class: "{class}",
            button {
                r#type: "button",
                class: "catalog-list__button",
                aria_current: "{aria_current}",
                onclick: move |_| onselect.call(item),
                if let Some(src) = icon {
                    img { class: "catalog-list__icon", src: "{src}", alt: "" }
                }
                span { class: "catalog-list__label", "{title}" }
            }
        }
    }
}
