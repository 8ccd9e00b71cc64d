use dioxus::prelude::*;

use crate::components::CatalogList;
use crate::t;

/// Landing destination. On a compact screen it is the catalog list itself; on
/// an expanded screen the list is already beside it, so it shows an empty
/// state instead.
#[component]
pub fn RootRoute(is_expanded_screen: bool) -> Element {
    if !is_expanded_screen {
        return rsx! {
            CatalogList { style: "width: 100%".to_string() }
        };
    }

    rsx! {
        section { class: "page page-root-empty",
            h1 { {t!("root-empty-title")} }
            p { {t!("root-empty-hint")} }
        }
    }
}
