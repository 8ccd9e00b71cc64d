use compass::{Heading, Position, SensorHealth};
use dioxus::prelude::*;

use crate::hooks::use_compass;
use crate::nav::Navigator;
use crate::t;

/// Compass destination: live heading and tilt position.
///
/// The compass is owned by this screen, so sensors run only while it is
/// mounted. Absent readings render a neutral dial.
#[component]
pub fn CompassRoute(is_expanded_screen: bool) -> Element {
    let readings = use_compass();
    let mut navigator = use_context::<Signal<Navigator>>();
    let details_open = navigator.read().current_state().details_open;

    let orientation = (readings.orientation)();
    let position = (readings.position)();
    let unavailable = (readings.health)() == SensorHealth::Unavailable;

    let heading_label = orientation
        .map(|heading| format!("{heading} {}", heading.cardinal()))
        .unwrap_or_else(|| "--".to_string());
    let position_label = position_label(position);
    let needle_rotation = orientation.map(Heading::degrees).unwrap_or(0.0);
    let dial_class = if orientation.is_some() {
        "compass__dial"
    } else {
        "compass__dial compass__dial--idle"
    };
    let threshold = format!("{:.0}", readings.config.tilt_threshold_deg);

    rsx! {
        section { class: "page page-compass",
            h1 { {t!("compass-route-label")} }

            if unavailable {
                p { class: "compass__notice", {t!("compass-unavailable")} }
            } else if orientation.is_none() {
                p { class: "compass__notice", {t!("compass-waiting")} }
            }

            div { class: "{dial_class}",
                // The needle points North: rotate against the heading.
                div {
                    class: "compass__needle",
                    style: "transform: rotate(-{needle_rotation}deg)",
                }
            }

            dl { class: "compass__readings",
                dt { {t!("compass-heading-label")} }
                dd { class: "compass__heading", "{heading_label}" }
                dt { {t!("compass-position-label")} }
                dd { class: "compass__position", "{position_label}" }
            }

            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| {
                    navigator.write().update_current_state(|state| state.details_open = !state.details_open);
                },
                if details_open { {t!("compass-details-hide")} } else { {t!("compass-details-show")} }
            }
            if details_open {
                p { class: "compass__details", {t!("compass-details-threshold", threshold = threshold)} }
            }

            if !is_expanded_screen {
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| navigator.write().navigate_to_root(),
                    {t!("compass-back")}
                }
            }
        }
    }
}

fn position_label(position: Option<Position>) -> String {
    match position {
        Some(Position::Flat) => t!("compass-position-flat"),
        Some(Position::Portrait) => t!("compass-position-portrait"),
        Some(Position::Landscape) => t!("compass-position-landscape"),
        None => t!("compass-position-unknown"),
    }
}
