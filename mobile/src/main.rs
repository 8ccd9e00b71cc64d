use dioxus::prelude::*;

use ui::CatalogApp;

fn main() {
    #[cfg(feature = "simulated-compass")]
    ui::sensors::register_sensor(|| Box::new(compass::SimulatedSensor::default()));

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { {ui::THEME_CSS} }

        CatalogApp {}
    }
}
