use dioxus::prelude::*;

use ui::CatalogApp;

fn main() {
    dioxus::launch(App);
}

/// Browsers expose no motion sensor backend here, so the compass screen
/// renders its "unavailable" state.
#[component]
fn App() -> Element {
    rsx! {
        document::Style { {ui::THEME_CSS} }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        CatalogApp {}
    }
}
