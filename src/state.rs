// SPDX-License-Identifier: PMPL-1.0-or-later

//! Browsing state for the flag list.
//!
//! State changes only through [`Browser::dispatch`]. Everything a view needs
//! (visible countries, selected country, its details) is derived from the
//! current [`AppState`] on demand, so listeners just re-read after a change.

use crate::catalog::{filter_by_name, CountryCatalog};
use crate::types::{Continent, Country, CountryDetails};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub continent: Continent,
    pub query: String,
    /// Id of the country whose detail card is open.
    pub selected: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectContinent(Continent),
    Search(String),
    SelectCountry(u32),
    ClearSelection,
}

type Listener = Box<dyn FnMut(&Browser)>;

pub struct Browser {
    catalog: CountryCatalog,
    state: AppState,
    listeners: Vec<Listener>,
}

impl Browser {
    pub fn new(catalog: CountryCatalog) -> Self {
        Self::with_state(catalog, AppState::default())
    }

    pub fn with_state(catalog: CountryCatalog, state: AppState) -> Self {
        Self {
            catalog,
            state,
            listeners: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a listener run after every state change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Browser) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Apply `action`. Returns whether the state changed; listeners only
    /// run when it did.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = self.reduce(action);
        if next == self.state {
            return false;
        }
        tracing::debug!(?next, "browser state changed");
        self.state = next;

        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener(&*self);
        }
        self.listeners = listeners;
        true
    }

    fn reduce(&self, action: Action) -> AppState {
        let mut next = self.state.clone();
        match action {
            Action::SelectContinent(continent) => next.continent = continent,
            Action::Search(query) => next.query = query,
            Action::SelectCountry(id) => {
                if self.catalog.get(id).is_some() {
                    next.selected = Some(id);
                }
            }
            Action::ClearSelection => next.selected = None,
        }
        next
    }

    /// Countries on the selected continent matching the search text.
    pub fn visible_countries(&self) -> Vec<&Country> {
        let on_continent = self.catalog.countries(self.state.continent);
        filter_by_name(&on_continent, &self.state.query)
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.state.selected.and_then(|id| self.catalog.get(id))
    }

    pub fn selected_details(&self) -> Option<&CountryDetails> {
        self.selected_country()
            .and_then(|country| self.catalog.details(country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn browser() -> Browser {
        let catalog = CountryCatalog::from_countries(vec![
            Country::new(1, "Poland", "Flags/poland", Continent::Europe, "PL"),
            Country::new(2, "France", "Flags/france", Continent::Europe, "FR"),
            Country::new(3, "Japan", "Flags/japan", Continent::Asia, "JP"),
        ])
        .unwrap();
        Browser::new(catalog)
    }

    fn visible(browser: &Browser) -> Vec<&str> {
        browser
            .visible_countries()
            .into_iter()
            .map(|c| c.name.as_str())
            .collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let browser = browser();
        assert_eq!(visible(&browser), vec!["Poland", "France", "Japan"]);
        assert!(browser.selected_country().is_none());
    }

    #[test]
    fn continent_then_search() {
        let mut browser = browser();
        assert!(browser.dispatch(Action::SelectContinent(Continent::Europe)));
        assert_eq!(visible(&browser), vec!["Poland", "France"]);
        assert!(browser.dispatch(Action::Search("pol".to_string())));
        assert_eq!(visible(&browser), vec!["Poland"]);
        assert!(browser.dispatch(Action::Search(String::new())));
        assert_eq!(visible(&browser), vec!["Poland", "France"]);
    }

    #[test]
    fn unknown_country_selection_is_ignored() {
        let mut browser = browser();
        assert!(!browser.dispatch(Action::SelectCountry(99)));
        assert!(browser.dispatch(Action::SelectCountry(3)));
        assert_eq!(browser.selected_country().map(|c| c.iso_code.as_str()), Some("JP"));
        assert!(browser.dispatch(Action::ClearSelection));
        assert!(browser.selected_country().is_none());
    }

    #[test]
    fn listeners_run_only_on_change() {
        let renders = Rc::new(RefCell::new(Vec::new()));
        let mut browser = browser();
        let sink = Rc::clone(&renders);
        browser.subscribe(move |b| sink.borrow_mut().push(b.visible_countries().len()));

        browser.dispatch(Action::SelectContinent(Continent::Asia));
        browser.dispatch(Action::SelectContinent(Continent::Asia));
        browser.dispatch(Action::SelectContinent(Continent::All));
        assert_eq!(*renders.borrow(), vec![1, 3]);
    }
}
