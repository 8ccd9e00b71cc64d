//! Embedded Fluent translations for the catalog shell.
//!
//! Bundles live in `i18n/<locale>/catalog-ui.ftl` and are compiled into the
//! binary. `en-US` is the fallback and the reference for key checks; the
//! locale is picked once from the platform's preferred languages.
//!
//! Destination titles are message ids too (`nav::CatalogItem::title_key`).

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message through [`LOADER`]; keys are checked at compile time.
///
/// `t!("compass-route-label")`, `t!("compass-details-threshold", threshold = "30")`
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match `domain` in `i18n.toml` and the bundle file names.
const DOMAIN: &str = "catalog-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Bundles;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static SELECTED: Once = Once::new();

/// Load the bundles matching the platform locale. Safe to call on every
/// render; only the first call does work.
pub fn init() {
    SELECTED.call_once(|| {
        match i18n_embed::select(&*LOADER, &Bundles, &preferred_languages()) {
            Ok(selected) => tracing::debug!(?selected, "translations loaded"),
            Err(err) => tracing::warn!(%err, "no translations selected; using the fallback bundle"),
        }
    });
}

/// Locales with an embedded bundle, sorted.
pub fn available_languages() -> Vec<String> {
    let mut locales: Vec<String> = Bundles::iter()
        .filter_map(|file| file.split_once('/').map(|(locale, _)| locale.to_string()))
        .collect();
    locales.sort();
    locales.dedup();
    locales
}

#[cfg(target_arch = "wasm32")]
fn preferred_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn preferred_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
