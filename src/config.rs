// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration
//!
//! Values come from command-line flags first, then environment variables,
//! then built-in defaults.

use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "TAPATERRA_HOME";
pub const SKIP_SPLASH_ENV: &str = "TAPATERRA_SKIP_SPLASH";
pub const DETAILS_ENV: &str = "TAPATERRA_DETAILS";

const DEFAULT_DATA_DIR: &str = ".tapaterra";
const PREFERENCES_FILE: &str = "preferences.json";
const ITEMS_FILE: &str = "items.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub skip_splash: bool,
    /// Replacement for the built-in country details.
    pub details_file: Option<PathBuf>,
}

/// Flag values from the command line; `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub skip_splash: bool,
    pub details_file: Option<PathBuf>,
}

impl Config {
    pub fn resolve(overrides: Overrides) -> Self {
        Self::resolve_with(overrides, |name| std::env::var(name).ok())
    }

    pub fn resolve_with<F>(overrides: Overrides, mut var: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let data_dir = overrides
            .data_dir
            .or_else(|| non_empty(var(HOME_ENV)).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let skip_splash = overrides.skip_splash
            || non_empty(var(SKIP_SPLASH_ENV))
                .map(|value| is_truthy(&value))
                .unwrap_or(false);
        let details_file = overrides
            .details_file
            .or_else(|| non_empty(var(DETAILS_ENV)).map(PathBuf::from));
        Self {
            data_dir,
            skip_splash,
            details_file,
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    pub fn items_path(&self) -> PathBuf {
        self.data_dir.join(ITEMS_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
