#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::core::config::ShellConfig;
use ui::CatalogApp;

/// Path of an optional JSON file overriding the shell configuration.
const SHELL_CONFIG_ENV: &str = "CATALOG_SHELL_CONFIG";

#[cfg(feature = "desktop")]
fn main() {
    #[cfg(feature = "simulated-compass")]
    ui::sensors::register_sensor(|| Box::new(compass::SimulatedSensor::default()));

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Catalog – v{}", env!("CARGO_PKG_VERSION")))
                    .with_min_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(320.0, 480.0)),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {}

#[component]
fn App() -> Element {
    // Loaded inside the app so the launch logger is already installed.
    let config = use_hook(load_shell_config);
    use_context_provider(|| config);

    // First CLI argument is an optional start route, e.g. `compass_route`.
    let start_route = use_hook(|| std::env::args().nth(1));

    rsx! {
        document::Style { {ui::THEME_CSS} }
        CatalogApp { start_route }
    }
}

fn load_shell_config() -> ShellConfig {
    let Ok(path) = std::env::var(SHELL_CONFIG_ENV) else {
        return ShellConfig::default();
    };
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(%path, %err, "cannot read shell configuration; using defaults");
            return ShellConfig::default();
        }
    };
    match ShellConfig::from_json(&raw) {
        Ok(config) => {
            tracing::info!(%path, ?config, "loaded shell configuration");
            config
        }
        Err(err) => {
            tracing::warn!(%path, %err, "invalid shell configuration; using defaults");
            ShellConfig::default()
        }
    }
}
