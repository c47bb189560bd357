// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for tapaterra.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | pl   | Polish   | Polski      |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"detail.capital"`,
//! `"continent.europe"`, `"splash.subtitle"`. A key missing from the
//! requested language resolves to the key string itself (fail-open, never
//! panics).
//!
//! The catalog is embedded at compile time. The only mutable piece is the
//! [`LanguageStore`], which is constructed explicitly and handed to whatever
//! renders text; there is no process-wide current language.

mod catalog;
mod locale;
mod store;

pub use catalog::{has_key, keys, t, Lang};
pub use locale::{detect_host_lang, detect_with, lang_from_locale, LOCALE_ENV_VARS};
pub use store::{LangSource, LanguageStore, SubscriptionId};
