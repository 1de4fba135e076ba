//! Fluent localization for the dashboard chrome.
//!
//! Message files are embedded from `i18n/<locale>/gradrates-ui.ftl`; `en-US`
//! is the fallback every other locale is checked against. Data labels
//! (category names, tooltip lines) are not translated: they come from the
//! fixture and `core::tooltip` verbatim.
//!
//! Launchers call [`init`] once and provide a `Signal<String>` holding the
//! active locale code. Components that render `t!` strings call
//! [`use_locale`] so a switch in the header re-renders them in place, without
//! remounting the page and losing the dashboard selection.
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use log::{debug, warn};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("key")` or `t!("key", year = "2024")`, looked up through [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

const DOMAIN: &str = "gradrates-ui";
pub const FALLBACK_LOCALE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Loads the user's preferred embedded locale. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!("event=i18n_init module=i18n status=ok selected={selected:?}"),
            Err(err) => warn!(
                "event=i18n_init module=i18n status=error reason=\"{err}\"; continuing with fallback"
            ),
        }
    });
}

#[derive(Debug)]
pub enum LocaleError {
    /// Not one of the embedded locale folders.
    Unavailable(String),
    Load(i18n_embed::I18nEmbedError),
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(tag) => write!(
                f,
                "locale `{tag}` is not available; expected one of {}",
                available_languages().join("|")
            ),
            Self::Load(err) => write!(f, "failed to load locale: {err}"),
        }
    }
}

impl Error for LocaleError {}

/// Switches every subsequent `t!` lookup to `tag`. Unknown tags leave the
/// active locale untouched.
pub fn set_language(tag: &str) -> Result<(), LocaleError> {
    if !available_languages().iter().any(|code| code == tag) {
        return Err(LocaleError::Unavailable(tag.to_string()));
    }
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LocaleError::Unavailable(tag.to_string()))?;
    i18n_embed::select(&*LOADER, &Localizations, &[lang])
        .map(|_| ())
        .map_err(LocaleError::Load)
}

/// Locale code currently used for lookups.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Embedded locale codes, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Subscribes the calling component to the launcher's locale signal and
/// returns its value. Without a provider this is a plain lookup.
pub fn use_locale() -> String {
    match try_use_context::<Signal<String>>() {
        Some(code) => code(),
        None => current_language(),
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
