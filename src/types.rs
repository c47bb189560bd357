// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for tapaterra
//!
//! Countries, the continent filter, the optional per-country facts joined
//! to them by ISO code, and the timestamped items of the item log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Continent filter. `All` is the "no filter" sentinel and never appears
/// on a [`Country`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Continent {
    #[default]
    All,
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

impl Continent {
    /// Every selector, in the order the filter bar shows them.
    pub fn all() -> &'static [Continent] {
        &[
            Continent::All,
            Continent::Africa,
            Continent::Asia,
            Continent::Europe,
            Continent::NorthAmerica,
            Continent::SouthAmerica,
            Continent::Oceania,
            Continent::Antarctica,
        ]
    }

    /// Real continents only, without the `All` sentinel.
    pub fn regions() -> &'static [Continent] {
        &Self::all()[1..]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Continent::All => "All",
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
        }
    }

    /// Translation key for the localized name.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Continent::All => "continent.all",
            Continent::Africa => "continent.africa",
            Continent::Asia => "continent.asia",
            Continent::Europe => "continent.europe",
            Continent::NorthAmerica => "continent.north_america",
            Continent::SouthAmerica => "continent.south_america",
            Continent::Oceania => "continent.oceania",
            Continent::Antarctica => "continent.antarctica",
        }
    }

    /// Parse `"north-america"`, `"north_america"`, `"North America"` or
    /// `"northamerica"`, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        let folded: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "all" => Some(Continent::All),
            "africa" => Some(Continent::Africa),
            "asia" => Some(Continent::Asia),
            "europe" => Some(Continent::Europe),
            "northamerica" => Some(Continent::NorthAmerica),
            "southamerica" => Some(Continent::SouthAmerica),
            "oceania" => Some(Continent::Oceania),
            "antarctica" => Some(Continent::Antarctica),
            _ => None,
        }
    }

    /// Whether a country on `other` passes this filter.
    pub fn admits(&self, other: Continent) -> bool {
        *self == Continent::All || *self == other
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A country or territory with a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Synthetic identity, unique within one catalog.
    pub id: u32,
    pub name: String,
    /// Flag asset path, e.g. `Flags/poland`.
    pub image_name: String,
    pub continent: Continent,
    /// ISO 3166-1 alpha-2, upper case.
    pub iso_code: String,
}

impl Country {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        image_name: impl Into<String>,
        continent: Continent,
        iso_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image_name: image_name.into(),
            continent,
            iso_code: iso_code.into().to_ascii_uppercase(),
        }
    }

    /// Regional-indicator emoji for the ISO code, e.g. 🇵🇱 for `PL`.
    pub fn flag_emoji(&self) -> String {
        self.iso_code
            .chars()
            .filter(char::is_ascii_uppercase)
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }
}

/// Extended facts about one country.
///
/// Field names follow the `country_details.json` layout (camelCase).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetails {
    #[serde(default)]
    pub iso_code: String,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub main_cities: Vec<String>,
    #[serde(default)]
    pub main_rivers: Vec<String>,
    #[serde(default)]
    pub main_mountains: Vec<String>,
    #[serde(default)]
    pub neighbours: Vec<String>,
    #[serde(default)]
    pub population: Option<u64>,
    /// Square kilometres.
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl CountryDetails {
    /// True when no field carries anything worth showing.
    pub fn is_empty(&self) -> bool {
        self.capital.is_none()
            && self.main_cities.is_empty()
            && self.main_rivers.is_empty()
            && self.main_mountains.is_empty()
            && self.neighbours.is_empty()
            && self.population.is_none()
            && self.area.is_none()
            && self.currency.is_none()
            && self.language.is_none()
    }
}

/// One entry of the item log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub timestamp: DateTime<Utc>,
}

impl Item {
    pub fn now() -> Self {
        Self {
            timestamp: Utc::now(),
        }
    }
}
