// SPDX-License-Identifier: PMPL-1.0-or-later

//! The localization store: current language, lookups through it, and
//! change notification for everything that renders text.

use super::catalog::{t, Lang};
use super::locale;
use crate::preferences::{MemoryPreferences, PreferenceStore, LANGUAGE_KEY};
use anyhow::{anyhow, Result};
use std::fmt;

/// Handle returned by [`LanguageStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&LanguageStore)>;

/// Where the initial language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangSource {
    Persisted,
    HostLocale,
    Default,
}

pub struct LanguageStore {
    current: Lang,
    source: LangSource,
    prefs: Box<dyn PreferenceStore>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl LanguageStore {
    /// Build the store, resolving the starting language from the persisted
    /// preference, then the host locale, then English.
    pub fn open(prefs: Box<dyn PreferenceStore>) -> Self {
        Self::open_with_host(prefs, locale::detect_host_lang())
    }

    /// Same as [`LanguageStore::open`] with an explicit host locale.
    pub fn open_with_host(prefs: Box<dyn PreferenceStore>, host: Option<Lang>) -> Self {
        let persisted = prefs.get(LANGUAGE_KEY);
        let (current, source) = match persisted.as_deref().and_then(Lang::from_code) {
            Some(lang) => (lang, LangSource::Persisted),
            None => {
                if let Some(raw) = persisted.as_deref() {
                    tracing::warn!(value = raw, "ignoring unsupported persisted language");
                }
                match host {
                    Some(lang) => (lang, LangSource::HostLocale),
                    None => (Lang::default(), LangSource::Default),
                }
            }
        };
        tracing::debug!(lang = %current, ?source, "language resolved");
        Self {
            current,
            source,
            prefs,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// A store pinned to `lang` that persists nowhere.
    pub fn fixed(lang: Lang) -> Self {
        let prefs = MemoryPreferences::new().with(LANGUAGE_KEY, lang.code());
        Self::open_with_host(Box::new(prefs), None)
    }

    pub fn current_language(&self) -> Lang {
        self.current
    }

    pub fn source(&self) -> LangSource {
        self.source
    }

    /// Translate `key` in the current language, or return the key.
    pub fn get(&self, key: &str) -> String {
        t(self.current, key).to_string()
    }

    /// Switch the current language.
    ///
    /// The choice is persisted before the in-memory state changes; if the
    /// write fails the store keeps its previous language. Listeners run
    /// synchronously before this returns, and only when the language
    /// actually changed.
    pub fn set_language(&mut self, lang: Lang) -> Result<()> {
        self.prefs.set(LANGUAGE_KEY, lang.code())?;
        let previous = self.current;
        self.current = lang;
        self.source = LangSource::Persisted;
        if previous != lang {
            tracing::info!(from = %previous, to = %lang, "language changed");
            self.notify();
        }
        Ok(())
    }

    /// Switch language by ISO 639-1 code, rejecting unsupported codes.
    pub fn set_language_code(&mut self, code: &str) -> Result<()> {
        let lang = Lang::from_code(code).ok_or_else(|| {
            let supported: Vec<&str> = Lang::all().iter().map(Lang::code).collect();
            anyhow!(
                "unsupported language '{}' (supported: {})",
                code,
                supported.join(", ")
            )
        })?;
        self.set_language(lang)
    }

    /// Register a listener called after every language change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&LanguageStore) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(&*self);
        }
        // Listeners only get `&self`, so the list cannot have grown meanwhile.
        self.listeners = listeners;
    }
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageStore")
            .field("current", &self.current)
            .field("source", &self.source)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
