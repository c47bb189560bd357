// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for tapaterra.
//!
//! Embeds all user-facing strings for supported languages as a compile-time
//! static table. Lookup is a linear scan over the key list of one language,
//! which is fine for the ~50 keys we carry; views call it a handful of times
//! per render.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add the code, display name and name key arms to `Lang::code()`,
//!    `Lang::display_name()` and `Lang::name_key()`
//! 3. Add a `"xx" => Some(Lang::Xx)` arm to `Lang::from_code()`
//! 4. Create a `const XX: &[(&str, &str)]` table below
//! 5. Add `Lang::Xx => XX` to the match in `catalog_for()`
//!
//! ## Adding a new key
//!
//! Add the entry to every table. There is no cross-language fallback: a key
//! missing from `PL` renders as the key itself, so the key-count test below
//! keeps the tables in step.

use serde::{Deserialize, Serialize};

/// Supported display languages.
///
/// Each variant maps to an ISO 639-1 two-letter code, which is also the
/// value persisted in the preference store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Pl,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pl => "pl",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Surrounding whitespace and letter case are ignored. Returns `None`
    /// for unsupported codes; use [`crate::i18n::lang_from_locale`] for
    /// full locale strings such as `pl_PL.UTF-8`.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "pl" => Some(Lang::Pl),
            _ => None,
        }
    }

    /// Name of the language in that language, as shown in the settings view.
    pub fn display_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Pl => "Polski",
        }
    }

    /// Key naming this language in whichever language is current, e.g.
    /// "Angielski" for English while the display language is Polish.
    pub fn name_key(&self) -> &'static str {
        match self {
            Lang::En => "content.english",
            Lang::Pl => "content.polish",
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Pl]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified language.
///
/// Returns the key itself when the language has no entry for it, so a
/// missing translation shows up as `detail.capital` on screen instead of
/// failing the caller.
///
/// # Examples
///
/// ```
/// use tapaterra::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "detail.capital"), "Capital");
/// assert_eq!(t(Lang::Pl, "detail.capital"), "Stolica");
/// assert_eq!(t(Lang::Pl, "no.such.key"), "no.such.key");
/// ```
pub fn t(lang: Lang, key: &str) -> &str {
    lookup(catalog_for(lang), key).unwrap_or(key)
}

/// Whether `lang` carries an entry for `key`.
pub fn has_key(lang: Lang, key: &str) -> bool {
    lookup(catalog_for(lang), key).is_some()
}

/// Every key defined for `lang`, in table order.
pub fn keys(lang: Lang) -> impl Iterator<Item = &'static str> {
    catalog_for(lang).iter().map(|&(k, _)| k)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Pl => PL,
    }
}

// ─── English ─────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    // Splash sequence
    ("splash.flags", "Flags"),
    ("splash.app_title", "Tapaterra"),
    ("splash.subtitle", "Explore the World's Flags"),
    // Featured flag names
    ("countries.usa", "United States"),
    ("countries.poland", "Poland"),
    ("countries.japan", "Japan"),
    ("countries.brazil", "Brazil"),
    ("countries.south_africa", "South Africa"),
    ("countries.france", "France"),
    ("countries.india", "India"),
    ("countries.canada", "Canada"),
    ("countries.australia", "Australia"),
    ("countries.argentina", "Argentina"),
    // Tabs
    ("tab.learn", "Learn"),
    ("tab.settings", "Settings"),
    // Continent filter
    ("continent.all", "All"),
    ("continent.africa", "Africa"),
    ("continent.asia", "Asia"),
    ("continent.europe", "Europe"),
    ("continent.north_america", "North America"),
    ("continent.south_america", "South America"),
    ("continent.oceania", "Oceania"),
    ("continent.antarctica", "Antarctica"),
    // Learn view
    ("learn.search", "Search"),
    ("learn.count", "countries"),
    ("learn.no_results", "No countries match"),
    // Country details
    ("detail.capital", "Capital"),
    ("detail.main_cities", "Main Cities"),
    ("detail.main_rivers", "Main Rivers"),
    ("detail.main_mountains", "Main Mountains"),
    ("detail.neighbours", "Neighbours"),
    ("detail.population", "Population"),
    ("detail.area", "Area"),
    ("detail.currency", "Currency"),
    ("detail.language", "Language"),
    ("detail.iso_code", "ISO code"),
    ("detail.continent", "Continent"),
    ("detail.no_data", "No detailed information available"),
    ("detail.not_found", "Country not found"),
    // Content / item log
    ("content.add_item", "Add Item"),
    ("content.item_at", "Item at"),
    ("content.no_items", "No items yet"),
    ("content.deleted", "Deleted items"),
    ("content.language", "Language"),
    ("content.change_language", "Change Language"),
    ("content.english", "English"),
    ("content.polish", "Polish"),
    ("content.current", "current"),
];

// ─── Polish ──────────────────────────────────────────────────────────

const PL: &[(&str, &str)] = &[
    ("splash.flags", "Flagi"),
    ("splash.app_title", "Tapaterra"),
    ("splash.subtitle", "Poznaj flagi świata"),
    ("countries.usa", "Stany Zjednoczone"),
    ("countries.poland", "Polska"),
    ("countries.japan", "Japonia"),
    ("countries.brazil", "Brazylia"),
    ("countries.south_africa", "Republika Południowej Afryki"),
    ("countries.france", "Francja"),
    ("countries.india", "Indie"),
    ("countries.canada", "Kanada"),
    ("countries.australia", "Australia"),
    ("countries.argentina", "Argentyna"),
    ("tab.learn", "Nauka"),
    ("tab.settings", "Ustawienia"),
    ("continent.all", "Wszystkie"),
    ("continent.africa", "Afryka"),
    ("continent.asia", "Azja"),
    ("continent.europe", "Europa"),
    ("continent.north_america", "Ameryka Północna"),
    ("continent.south_america", "Ameryka Południowa"),
    ("continent.oceania", "Oceania"),
    ("continent.antarctica", "Antarktyda"),
    ("learn.search", "Szukaj"),
    ("learn.count", "krajów"),
    ("learn.no_results", "Brak pasujących krajów"),
    ("detail.capital", "Stolica"),
    ("detail.main_cities", "Główne miasta"),
    ("detail.main_rivers", "Główne rzeki"),
    ("detail.main_mountains", "Główne góry"),
    ("detail.neighbours", "Sąsiedzi"),
    ("detail.population", "Populacja"),
    ("detail.area", "Powierzchnia"),
    ("detail.currency", "Waluta"),
    ("detail.language", "Język"),
    ("detail.iso_code", "Kod ISO"),
    ("detail.continent", "Kontynent"),
    ("detail.no_data", "Brak szczegółowych informacji"),
    ("detail.not_found", "Nie znaleziono kraju"),
    ("content.add_item", "Dodaj element"),
    ("content.item_at", "Element z"),
    ("content.no_items", "Brak elementów"),
    ("content.deleted", "Usunięte elementy"),
    ("content.language", "Język"),
    ("content.change_language", "Zmień język"),
    ("content.english", "Angielski"),
    ("content.polish", "Polski"),
    ("content.current", "bieżący"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_configured_key_resolves_to_its_value() {
        for lang in Lang::all() {
            for &(key, value) in catalog_for(*lang) {
                assert_eq!(t(*lang, key), value, "{:?} key '{}'", lang, key);
            }
        }
    }

    #[test]
    fn unknown_key_returns_key() {
        for lang in Lang::all() {
            assert_eq!(t(*lang, "nonexistent.key"), "nonexistent.key");
            assert_eq!(t(*lang, ""), "");
        }
    }

    #[test]
    fn polish_does_not_fall_back_to_english() {
        assert!(!has_key(Lang::Pl, "nonexistent.key"));
        assert_eq!(t(Lang::Pl, "detail.population"), "Populacja");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
    }

    #[test]
    fn from_code_ignores_case_and_padding() {
        assert_eq!(Lang::from_code(" PL "), Some(Lang::Pl));
        assert_eq!(Lang::from_code("En"), Some(Lang::En));
        assert_eq!(Lang::from_code("de"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn catalogs_share_the_same_keys() {
        assert_eq!(PL.len(), EN.len(), "PL catalog key count mismatch");
        for &(key, _) in EN {
            assert!(has_key(Lang::Pl, key), "PL is missing '{}'", key);
        }
    }

    #[test]
    fn keys_are_unique_per_language() {
        for lang in Lang::all() {
            let mut seen = std::collections::HashSet::new();
            for key in keys(*lang) {
                assert!(seen.insert(key), "{:?} has duplicate key '{}'", lang, key);
            }
        }
    }

    #[test]
    fn every_language_name_is_translated() {
        for lang in Lang::all() {
            for named in Lang::all() {
                assert!(has_key(*lang, named.name_key()), "{:?} lacks {}", lang, named.name_key());
            }
        }
        assert_eq!(t(Lang::Pl, Lang::En.name_key()), "Angielski");
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Lang::Pl).unwrap(), "\"pl\"");
        let parsed: Lang = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Lang::En);
    }
}
