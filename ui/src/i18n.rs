//! Localization for the site chrome.
//!
//! Navbar, footer, demo form and section headings go through Fluent; the long
//! marketing copy in [`crate::content`] stays English-only.
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/nl2sql-ui.ftl   (fallback, compile-time checked by `fl!`)
//!   es-ES/nl2sql-ui.ftl
//! ```
//!
//! Call [`init`] once before rendering, then look messages up with
//! `t!("nav-home")`. [`set_language`] switches at runtime; the shell keeps a
//! `Signal<String>` with the active tag so views re-render after a switch.
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

use crate::navigation::NavRoute;

/// Looks up a message ID (optionally with named arguments) in the shared [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the FTL file stem in every locale folder.
const DOMAIN: &str = "nl2sql-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the platform's preferred languages. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "i18n initialised"),
            Err(err) => warn!("i18n language selection failed ({err}); using fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        warn!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language tags with an embedded bundle, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Localized navbar label for a route.
pub fn nav_label(route: NavRoute) -> String {
    match route {
        NavRoute::Home => crate::t!("nav-home"),
        NavRoute::Features => crate::t!("nav-features"),
        NavRoute::HowItWorks => crate::t!("nav-how-it-works"),
        NavRoute::Demo => crate::t!("nav-demo"),
        NavRoute::Docs => crate::t!("nav-docs"),
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
