// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country catalog: the static flag list, continent filtering, name search
//! and the per-country details index.
//!
//! The catalog is read-only once built. Details are joined to countries by
//! ISO code through an index that is built on first use and then kept for
//! the lifetime of the catalog.

mod flags;

use crate::types::{Continent, Country, CountryDetails};
use anyhow::{bail, Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Details shipped with the binary, in the `country_details.json` layout.
const BUILTIN_DETAILS: &str = include_str!("../../data/country_details.json");

type DetailsIndex = HashMap<String, CountryDetails>;

#[derive(Debug)]
pub struct CountryCatalog {
    countries: Vec<Country>,
    details: OnceLock<DetailsIndex>,
}

impl CountryCatalog {
    /// The built-in catalog of every flag we ship.
    pub fn new() -> Self {
        let countries = flags::FLAGS
            .iter()
            .enumerate()
            .map(|(idx, &(name, slug, continent, iso))| {
                Country::new(
                    idx as u32 + 1,
                    name,
                    format!("Flags/{}", slug),
                    continent,
                    iso,
                )
            })
            .collect();
        Self {
            countries,
            details: OnceLock::new(),
        }
    }

    /// A catalog over caller-supplied countries, using the built-in details.
    ///
    /// ISO codes are stored upper-cased. Fails if two countries share an id
    /// or an ISO code (in any letter case), or if a country is filed under
    /// the `All` sentinel.
    pub fn from_countries(mut countries: Vec<Country>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut codes = HashSet::new();
        for country in &mut countries {
            country.iso_code = country.iso_code.trim().to_ascii_uppercase();
            if country.continent == Continent::All {
                bail!("country '{}' has no continent", country.name);
            }
            if !ids.insert(country.id) {
                bail!("duplicate country id {}", country.id);
            }
            if !codes.insert(country.iso_code.clone()) {
                bail!("duplicate ISO code {}", country.iso_code);
            }
        }
        Ok(Self {
            countries,
            details: OnceLock::new(),
        })
    }

    /// Replace the details source with an explicit set of records.
    pub fn with_details<I>(self, details: I) -> Self
    where
        I: IntoIterator<Item = CountryDetails>,
    {
        let index: DetailsIndex = details
            .into_iter()
            .map(|d| (d.iso_code.to_ascii_uppercase(), d))
            .collect();
        Self {
            countries: self.countries,
            details: OnceLock::from(index),
        }
    }

    /// Replace the details source with a `country_details.json` file.
    pub fn with_details_file(self, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading country details from {}", path.display()))?;
        let index = parse_details(&content)
            .with_context(|| format!("parsing country details in {}", path.display()))?;
        tracing::info!(path = %path.display(), entries = index.len(), "loaded country details");
        Ok(Self {
            countries: self.countries,
            details: OnceLock::from(index),
        })
    }

    /// Every country, in catalog order.
    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Countries on `continent`, in catalog order. `All` returns everything.
    pub fn countries(&self, continent: Continent) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|country| continent.admits(country.continent))
            .collect()
    }

    /// Extended facts for `country`, if any were recorded.
    pub fn details(&self, country: &Country) -> Option<&CountryDetails> {
        self.details_for_iso(&country.iso_code)
    }

    /// Extended facts by ISO code, ignoring case.
    pub fn details_for_iso(&self, iso_code: &str) -> Option<&CountryDetails> {
        self.details_index().get(&iso_code.trim().to_ascii_uppercase())
    }

    /// Number of countries with a details record.
    pub fn details_coverage(&self) -> usize {
        let index = self.details_index();
        self.countries
            .iter()
            .filter(|country| index.contains_key(&country.iso_code))
            .count()
    }

    /// Resolve a country by ISO code or by exact name, ignoring case.
    pub fn find(&self, query: &str) -> Option<&Country> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|country| country.iso_code.eq_ignore_ascii_case(query))
            .or_else(|| {
                let folded = query.to_lowercase();
                self.countries
                    .iter()
                    .find(|country| country.name.to_lowercase() == folded)
            })
    }

    pub fn get(&self, id: u32) -> Option<&Country> {
        self.countries.iter().find(|country| country.id == id)
    }

    fn details_index(&self) -> &DetailsIndex {
        self.details.get_or_init(|| match parse_details(BUILTIN_DETAILS) {
            Ok(index) => {
                tracing::debug!(entries = index.len(), "built country details index");
                index
            }
            Err(err) => {
                tracing::error!("built-in country details are unreadable: {:#}", err);
                HashMap::new()
            }
        })
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep countries whose name contains `query`, ignoring case.
///
/// A blank query keeps everything. Order is preserved.
pub fn filter_by_name<'a>(countries: &[&'a Country], query: &str) -> Vec<&'a Country> {
    let query = query.trim();
    if query.is_empty() {
        return countries.to_vec();
    }
    let needle = query.to_lowercase();
    countries
        .iter()
        .copied()
        .filter(|country| country.name.to_lowercase().contains(&needle))
        .collect()
}

fn parse_details(content: &str) -> Result<DetailsIndex> {
    let raw: HashMap<String, CountryDetails> = serde_json::from_str(content)?;
    let mut index = HashMap::with_capacity(raw.len());
    for (key, mut details) in raw {
        let code = key.trim().to_ascii_uppercase();
        if details.iso_code.is_empty() {
            details.iso_code = code.clone();
        } else if !details.iso_code.eq_ignore_ascii_case(&code) {
            bail!(
                "details keyed '{}' carry ISO code '{}'",
                key,
                details.iso_code
            );
        }
        index.insert(code, details);
    }
    Ok(index)
}
