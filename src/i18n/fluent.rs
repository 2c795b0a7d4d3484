// SPDX-License-Identifier: MPL-2.0
//! Fluent-based localization.
//!
//! Locales ship embedded in the binary (`assets/i18n/*.ftl`). An explicit
//! directory can override them for custom builds or tests. Locale resolution
//! order: CLI flag, config file, OS locale, then `en-US`.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads all locale bundles and resolves the active locale.
    ///
    /// `i18n_dir` points at a directory of `.ftl` files named after their
    /// locale (`fr.ftl`); when given, it replaces the embedded assets.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        let sources = match i18n_dir {
            Some(dir) => load_from_dir(&dir),
            None => load_embedded(),
        };

        for (locale, content) in sources {
            match FluentResource::try_new(content) {
                Ok(res) => {
                    let mut bundle = FluentBundle::new(vec![locale.clone()]);
                    if bundle.add_resource(res).is_ok() {
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
                Err(_) => continue, // skip malformed FTL rather than abort startup
            }
        }

        let default_locale: LanguageIdentifier = FALLBACK_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Translates a message key for the current locale. Unknown keys come
    /// back marked so they show up during development instead of vanishing.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn load_embedded() -> Vec<(LanguageIdentifier, String)> {
    let mut sources = Vec::new();
    for file in Asset::iter() {
        let filename = file.as_ref();
        if let Some(locale_str) = filename.strip_suffix(".ftl") {
            if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                if let Some(content) = Asset::get(filename) {
                    sources.push((
                        locale,
                        String::from_utf8_lossy(content.data.as_ref()).to_string(),
                    ));
                }
            }
        }
    }
    sources
}

fn load_from_dir(dir: &str) -> Vec<(LanguageIdentifier, String)> {
    let mut sources = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return sources;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if path.extension().and_then(|e| e.to_str()) != Some("ftl") {
            continue;
        }
        if let Ok(locale) = stem.parse::<LanguageIdentifier>() {
            if let Ok(content) = std::fs::read_to_string(&path) {
                sources.push((locale, content));
            }
        }
    }
    sources
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
