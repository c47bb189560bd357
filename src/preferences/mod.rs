// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key-value preference storage.
//!
//! Preferences are a flat string-to-string map. The file backend keeps the
//! whole map in memory and rewrites `preferences.json` on every `set`, so a
//! crash right after a language switch still leaves the new choice on disk.

use crate::storage::write_atomic;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the selected language code.
pub const LANGUAGE_KEY: &str = "appLanguage";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences held only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with `value`.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences persisted as a JSON object on disk.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Load preferences from `path`. A missing file is an empty store; an
    /// unreadable or malformed one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading preferences from {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing preferences in {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), entries = values.len(), "loaded preferences");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.values)?;
        write_atomic(&self.path, &payload)
            .with_context(|| format!("writing preferences to {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_roundtrip() {
        let mut prefs = MemoryPreferences::new();
        assert_eq!(prefs.get(LANGUAGE_KEY), None);
        prefs.set(LANGUAGE_KEY, "pl").unwrap();
        assert_eq!(prefs.get(LANGUAGE_KEY).as_deref(), Some("pl"));
    }

    #[test]
    fn seeded_memory_store() {
        let prefs = MemoryPreferences::new().with(LANGUAGE_KEY, "pl");
        assert_eq!(prefs.get(LANGUAGE_KEY).as_deref(), Some("pl"));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let prefs = FilePreferences::open(dir.path().join("preferences.json")).unwrap();
        assert_eq!(prefs.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn set_writes_through_to_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let mut prefs = FilePreferences::open(&path).unwrap();
        prefs.set(LANGUAGE_KEY, "pl").unwrap();

        let reopened = FilePreferences::open(&path).unwrap();
        assert_eq!(reopened.get(LANGUAGE_KEY).as_deref(), Some("pl"));
    }

    #[test]
    fn failed_write_keeps_previous_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        let mut prefs = FilePreferences::open(&path).unwrap();
        prefs.set(LANGUAGE_KEY, "en").unwrap();
        let before = fs::read_to_string(&path).unwrap();

        fs::create_dir(crate::storage::staging_path(&path)).unwrap();
        assert!(prefs.set(LANGUAGE_KEY, "pl").is_err());
        assert_eq!(prefs.get(LANGUAGE_KEY).as_deref(), Some("en"));

        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        let reopened = FilePreferences::open(&path).unwrap();
        assert_eq!(reopened.get(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();
        assert!(FilePreferences::open(&path).is_err());
    }
}
