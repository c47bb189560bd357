// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for translation lookups and the persisted language choice

use std::cell::RefCell;
use std::rc::Rc;
use tapaterra::i18n::{keys, t, Lang, LangSource, LanguageStore};
use tapaterra::preferences::{FilePreferences, PreferenceStore, LANGUAGE_KEY};
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> LanguageStore {
    let prefs = FilePreferences::open(dir.path().join("preferences.json")).unwrap();
    LanguageStore::open_with_host(Box::new(prefs), None)
}

#[test]
fn test_get_returns_configured_string_for_every_key() {
    for lang in Lang::all() {
        let store = LanguageStore::fixed(*lang);
        for key in keys(*lang) {
            assert_eq!(store.get(key), t(*lang, key));
        }
    }
}

#[test]
fn test_switching_changes_every_differing_key() {
    let mut store = LanguageStore::fixed(Lang::En);
    let english: Vec<(&str, String)> = keys(Lang::En).map(|k| (k, store.get(k))).collect();
    store.set_language(Lang::Pl).unwrap();
    for (key, en_value) in english {
        let pl_value = store.get(key);
        if t(Lang::En, key) != t(Lang::Pl, key) {
            assert_ne!(pl_value, en_value, "'{}' did not change", key);
        }
        assert_eq!(pl_value, t(Lang::Pl, key));
    }
}

#[test]
fn test_absent_keys_return_key() {
    for lang in Lang::all() {
        let store = LanguageStore::fixed(*lang);
        for key in ["missing", "detail.nonexistent", "Some Free Text"] {
            assert_eq!(store.get(key), key);
        }
    }
}

#[test]
fn test_language_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open_store(&dir);
        assert_eq!(store.current_language(), Lang::En);
        store.set_language_code("pl").unwrap();
    }

    let store = open_store(&dir);
    assert_eq!(store.current_language(), Lang::Pl);
    assert_eq!(store.source(), LangSource::Persisted);
    assert_eq!(store.get("tab.settings"), "Ustawienia");
}

#[test]
fn test_write_through_happens_on_every_change() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    let mut store = open_store(&dir);

    store.set_language(Lang::Pl).unwrap();
    assert_eq!(
        FilePreferences::open(&path).unwrap().get(LANGUAGE_KEY).as_deref(),
        Some("pl")
    );
    store.set_language(Lang::En).unwrap();
    assert_eq!(
        FilePreferences::open(&path).unwrap().get(LANGUAGE_KEY).as_deref(),
        Some("en")
    );
}

#[test]
fn test_rejected_code_is_not_persisted() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    assert!(store.set_language_code("klingon").is_err());
    assert!(!dir.path().join("preferences.json").exists());
}

#[test]
fn test_subscribers_never_see_mixed_languages() {
    let frames = Rc::new(RefCell::new(Vec::new()));
    let mut store = LanguageStore::fixed(Lang::En);
    let sink = Rc::clone(&frames);
    store.subscribe(move |s| {
        sink.borrow_mut()
            .push((s.get("detail.capital"), s.get("detail.area")));
    });

    store.set_language(Lang::Pl).unwrap();
    store.set_language(Lang::En).unwrap();
    assert_eq!(
        *frames.borrow(),
        vec![
            ("Stolica".to_string(), "Powierzchnia".to_string()),
            ("Capital".to_string(), "Area".to_string()),
        ]
    );
}
