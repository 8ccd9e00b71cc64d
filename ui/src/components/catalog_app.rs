use dioxus::prelude::*;

use crate::components::{CatalogList, CatalogNavHost};
use crate::core::config::ShellConfig;
use crate::core::layout::{shell_layout, ShellLayout};
use crate::core::window::WidthClass;
use crate::hooks::use_list_width_fraction;
use crate::i18n;
use crate::nav::Navigator;

/// Root of the application: the catalog list and the content of the current
/// destination, laid out for the current width.
///
/// `width_class` overrides the measured width when the platform knows better.
/// `start_route` is selected once on first render (deep link).
#[component]
pub fn CatalogApp(width_class: Option<WidthClass>, start_route: Option<String>) -> Element {
    i18n::init();

    let config = try_use_context::<ShellConfig>()
        .and_then(|config| match config.validated() {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!(%err, "ignoring invalid shell configuration");
                None
            }
        })
        .unwrap_or_default();

    let navigator = use_signal(|| {
        let mut navigator = Navigator::new();
        if let Some(route) = start_route.as_deref() {
            if let Err(err) = navigator.select(route) {
                tracing::error!(%err, "start route ignored");
            }
        }
        navigator
    });
    use_context_provider(|| navigator);

    let mut measured = use_signal(WidthClass::default);
    let width = width_class.unwrap_or_else(|| measured());

    let is_root = use_memo(move || navigator.read().is_at_root());
    let list_fraction = use_list_width_fraction(is_root, config);

    // One template for every width so the host (and the screen it shows)
    // keeps its identity when the width class changes.
    let layout = shell_layout(navigator.read().current_route(), width, &config);
    let side_by_side = match layout {
        ShellLayout::SideBySide { .. } => true,
        ShellLayout::ListOnly | ShellLayout::ContentOnly => false,
    };
    let list_style = format!("width: {:.2}%", list_fraction() * 100.0);

    rsx! {
        div {
            class: "catalog-app",
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.data().get_content_box_size() {
                    let class = WidthClass::from_width_dp(size.width);
                    if class != *measured.peek() {
                        tracing::debug!(?class, width = size.width, "width class changed");
                        measured.set(class);
                    }
                }
            },
            if side_by_side {
                CatalogList { style: list_style }
            }
            CatalogNavHost { is_expanded_screen: side_by_side }
        }
    }
}
