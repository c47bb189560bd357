// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text views
//!
//! Every view is a function of the current state returning a `String`;
//! callers print it and call it again after the state changes.

mod detail;

pub use detail::render_country_detail;

use crate::i18n::{Lang, LanguageStore};
use crate::splash::FeaturedFlag;
use crate::state::Browser;
use crate::storage::ItemLog;
use crate::types::Continent;
use colored::*;
use std::fmt::Write;

/// Timestamp layout for item rows: numeric date, then time.
const ITEM_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render_splash(flags: &[FeaturedFlag<'_>], store: &LanguageStore) -> String {
    let mut out = String::new();
    let strip: Vec<String> = flags.iter().map(|f| f.country.flag_emoji()).collect();
    let _ = writeln!(out, "{}", strip.join(" "));
    out.push('\n');
    let _ = writeln!(out, "{}", store.get("splash.app_title").bold().magenta());
    let _ = writeln!(out, "{}", store.get("splash.subtitle").italic());
    out.push('\n');
    let labels: Vec<&str> = flags.iter().map(|f| f.label.as_str()).collect();
    let _ = writeln!(out, "{}: {}", store.get("splash.flags").bold(), labels.join(", "));
    out
}

/// The continent filter bar, with the active selector highlighted.
pub fn render_continent_bar(selected: Continent, store: &LanguageStore) -> String {
    Continent::all()
        .iter()
        .map(|continent| {
            let label = store.get(continent.i18n_key());
            if *continent == selected {
                format!("[{}]", label).bold().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The learn view: title, continent bar, search line and the flag list.
pub fn render_country_list(browser: &Browser, store: &LanguageStore) -> String {
    let state = browser.state();
    let visible = browser.visible_countries();
    let mut out = String::new();

    let _ = writeln!(out, "{}", store.get("tab.learn").bold().cyan());
    let _ = writeln!(out, "{}", render_continent_bar(state.continent, store));
    if !state.query.trim().is_empty() {
        let _ = writeln!(out, "{}: {}", store.get("learn.search"), state.query.trim());
    }
    out.push('\n');

    if visible.is_empty() {
        let _ = writeln!(out, "  {}", store.get("learn.no_results").italic());
        return out;
    }
    for country in &visible {
        let _ = writeln!(
            out,
            "  {:>3}  {} {} {}",
            country.id,
            country.flag_emoji(),
            country.name,
            format!("({})", country.iso_code).dimmed()
        );
    }
    out.push('\n');
    let _ = writeln!(out, "{} {}", visible.len(), store.get("learn.count"));
    out
}

/// The settings view: each language under its own name, followed by its
/// name in the current language when the two differ.
pub fn render_language_settings(store: &LanguageStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", store.get("tab.settings").bold().cyan());
    let _ = writeln!(out, "{}", store.get("content.language").bold());
    for lang in Lang::all() {
        let translated = store.get(lang.name_key());
        let name = if translated == lang.display_name() {
            lang.display_name().to_string()
        } else {
            format!("{} / {}", lang.display_name(), translated)
        };
        let marker = if *lang == store.current_language() {
            format!("● {} ({})", name, store.get("content.current"))
                .green()
                .to_string()
        } else {
            format!("○ {}", name)
        };
        let _ = writeln!(out, "  {}  {}", lang.code(), marker);
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "{}: {}",
        store.get("content.change_language").dimmed(),
        "tapaterra lang <code>".dimmed()
    );
    out
}

pub fn render_items(log: &ItemLog, store: &LanguageStore) -> String {
    let mut out = String::new();
    if log.is_empty() {
        let _ = writeln!(out, "{}", store.get("content.no_items").italic());
        return out;
    }
    for (idx, item) in log.items().iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>3}  {} {}",
            idx,
            store.get("content.item_at"),
            item.timestamp.format(ITEM_TIME_FORMAT)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CountryCatalog;
    use crate::state::Action;
    use crate::types::Country;

    fn browser() -> Browser {
        Browser::new(
            CountryCatalog::from_countries(vec![
                Country::new(1, "Poland", "Flags/poland", Continent::Europe, "PL"),
                Country::new(2, "France", "Flags/france", Continent::Europe, "FR"),
                Country::new(3, "Japan", "Flags/japan", Continent::Asia, "JP"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn list_shows_filtered_countries() {
        colored::control::set_override(false);
        let store = LanguageStore::fixed(Lang::En);
        let mut browser = browser();
        browser.dispatch(Action::SelectContinent(Continent::Europe));
        let view = render_country_list(&browser, &store);
        assert!(view.contains("[Europe]"));
        assert!(view.contains("Poland (PL)"));
        assert!(view.contains("France (FR)"));
        assert!(!view.contains("Japan"));
        assert!(view.contains("2 countries"));
    }

    #[test]
    fn empty_search_result_has_placeholder() {
        colored::control::set_override(false);
        let store = LanguageStore::fixed(Lang::Pl);
        let mut browser = browser();
        browser.dispatch(Action::Search("zzz".to_string()));
        let view = render_country_list(&browser, &store);
        assert!(view.contains("Brak pasujących krajów"));
        assert!(view.contains("Szukaj: zzz"));
    }

    #[test]
    fn settings_mark_current_language() {
        colored::control::set_override(false);
        let store = LanguageStore::fixed(Lang::Pl);
        let view = render_language_settings(&store);
        assert!(view.contains("Ustawienia"));
        assert!(view.contains("● Polski (bieżący)"));
        assert!(view.contains("○ English / Angielski"));
        assert!(view.contains("Zmień język: tapaterra lang <code>"));
    }

    #[test]
    fn settings_name_languages_in_current_language() {
        colored::control::set_override(false);
        let store = LanguageStore::fixed(Lang::En);
        let view = render_language_settings(&store);
        assert!(view.contains("● English (current)"));
        assert!(view.contains("○ Polski / Polish"));
        assert!(view.contains("Change Language:"));
    }
}
