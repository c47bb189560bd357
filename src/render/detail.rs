// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country detail card.

use crate::format::{format_area, format_population};
use crate::i18n::LanguageStore;
use crate::types::{Country, CountryDetails};
use colored::*;
use std::fmt::Write;

/// Render the detail card for `country`.
///
/// List sections (cities, rivers, ...) are omitted when empty and scalar
/// rows when absent. Without any details the card shows the localized
/// "no data" placeholder under the name.
pub fn render_country_detail(
    country: &Country,
    details: Option<&CountryDetails>,
    store: &LanguageStore,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        country.flag_emoji(),
        country.name.bold().white()
    );
    let _ = writeln!(
        out,
        "  {}: {}    {}: {}",
        store.get("detail.iso_code").dimmed(),
        country.iso_code,
        store.get("detail.continent").dimmed(),
        store.get(country.continent.i18n_key())
    );
    let _ = writeln!(out, "  {}", country.image_name.dimmed());
    out.push('\n');

    let details = match details.filter(|d| !d.is_empty()) {
        Some(details) => details,
        None => {
            let _ = writeln!(out, "  {}", store.get("detail.no_data").italic());
            return out;
        }
    };

    if let Some(capital) = &details.capital {
        section(&mut out, &store.get("detail.capital"), std::slice::from_ref(capital));
    }
    section(&mut out, &store.get("detail.main_cities"), &details.main_cities);
    section(&mut out, &store.get("detail.main_rivers"), &details.main_rivers);
    section(&mut out, &store.get("detail.main_mountains"), &details.main_mountains);
    section(&mut out, &store.get("detail.neighbours"), &details.neighbours);

    if let Some(population) = details.population {
        info_row(&mut out, &store.get("detail.population"), &format_population(population));
    }
    if let Some(area) = details.area {
        info_row(&mut out, &store.get("detail.area"), &format_area(area));
    }
    if let Some(currency) = &details.currency {
        info_row(&mut out, &store.get("detail.currency"), currency);
    }
    if let Some(language) = &details.language {
        info_row(&mut out, &store.get("detail.language"), language);
    }
    out
}

fn section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}", title.bold().yellow());
    for item in items {
        let _ = writeln!(out, "  • {}", item);
    }
    out.push('\n');
}

fn info_row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{:<14} {}", format!("{}:", label).cyan(), value);
}
