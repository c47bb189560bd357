// SPDX-License-Identifier: PMPL-1.0-or-later

//! Compact human-readable figures for the country detail card.

/// `38.00M`, `1.40B`, `451`.
pub fn format_population(population: u64) -> String {
    let value = population as f64;
    if population >= 1_000_000_000 {
        format!("{:.2}B", value / 1_000_000_000.0)
    } else if population >= 1_000_000 {
        format!("{:.2}M", value / 1_000_000.0)
    } else if population >= 1_000 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        population.to_string()
    }
}

/// `9.4M km²`, `312.7K km²`, `2 km²`.
pub fn format_area(area: f64) -> String {
    if area >= 1_000_000.0 {
        format!("{:.1}M km²", area / 1_000_000.0)
    } else if area >= 1_000.0 {
        format!("{:.1}K km²", area / 1_000.0)
    } else {
        format!("{:.0} km²", area)
    }
}
