//! Fluent translations for the dashboard chrome.
//!
//! Bundles live under `i18n/<locale>/metabo-ui.ftl` and are embedded at compile time;
//! `en-US` is the fallback every lookup resolves against. Parameter names shown on the
//! chart (Glycémie, Cétonémie, GKI) are data labels and stay untranslated.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// `t!("key")` looks the key up in the shared loader. Keys are checked against the
/// fallback bundle at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
}

const DOMAIN: &str = "metabo-ui";
const FALLBACK: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK));

static INIT: Once = Once::new();

/// Pick the best bundle for the system/browser languages. Runs once per process.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            log::warn!("failed selecting languages ({err}); continuing with {FALLBACK}");
        }
    });
}

/// Switch the active bundle. Returns `false` when the tag is not a valid identifier
/// or no bundle could be selected, leaving the current language in place.
pub fn set_language(tag: &str) -> bool {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        log::warn!("ignoring invalid language tag `{tag}`");
        return false;
    };
    match i18n_embed::select(&*LOADER, &Localizations, &[lang]) {
        Ok(_) => true,
        Err(err) => {
            log::warn!("could not switch language to `{tag}`: {err}");
            false
        }
    }
}

/// Locales that ship a bundle, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_bundles_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "fr-FR"]);
    }

    #[test]
    fn invalid_tag_keeps_current_language() {
        assert!(set_language("en-US"));
        let before = t!("nav-dashboard");
        assert!(!set_language("not a tag!"));
        assert_eq!(t!("nav-dashboard"), before);
    }

    #[test]
    fn fallback_bundle_resolves_keys() {
        assert!(set_language("en-US"));
        assert_eq!(t!("nav-dashboard"), "Dashboard");
    }
}
