//! Localization for the dashboard.
//!
//! Fluent bundles live under `ui/i18n/<lang>/salesboard-ui.ftl` and are
//! embedded with `rust-embed`; `en-US` is the fallback and the reference file
//! that `fl!` checks keys against at compile time.
//!
//! ```ignore
//! ui::i18n::init(); // idempotent
//! let title = t!("chat-title");
//! let summary = t!("upload-summary", days = 30, events = 4);
//! ```
//!
//! Platform shells may provide a `Signal<String>` holding the active language
//! tag as context; components call [`use_locale`] so they re-render when the
//! header switcher changes it.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Message lookup through the shared [`LOADER`]: `t!(id)` or `t!(id, arg = value, ...)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the bundle filename.
const DOMAIN: &str = "salesboard-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default());
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the platform's preferred languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = select(&requested_languages()) {
            warn!("selecting languages failed ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    select(&[lang])
}

fn select(requested: &[LanguageIdentifier]) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, requested)?;
    // Interpolated values land in chat bubbles verbatim; no bidi isolation marks.
    LOADER.set_use_isolating(false);
    Ok(())
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

/// Tag of the language currently serving lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Subscribe the calling component to the shell's language signal, if any.
pub fn use_locale() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(current_language)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
