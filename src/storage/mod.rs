// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage for the item log
//!
//! The log is a JSON array of timestamped entries. Every mutation rewrites
//! the file, so the on-disk copy always matches what the user last saw.

use crate::types::Item;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ItemLog {
    path: PathBuf,
    items: Vec<Item>,
}

impl ItemLog {
    /// Open the log at `path`. A missing file is an empty log; a file that
    /// cannot be read or parsed is an error the caller should treat as
    /// fatal.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading item store {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing item store {}", path.display()))?
        } else {
            Vec::new()
        };
        tracing::debug!(path = %path.display(), items = items.len(), "opened item store");
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an entry stamped with the current time.
    pub fn add(&mut self) -> Result<Item> {
        self.add_at(Utc::now())
    }

    /// Append an entry with an explicit timestamp.
    pub fn add_at(&mut self, timestamp: DateTime<Utc>) -> Result<Item> {
        let item = Item { timestamp };
        self.items.push(item);
        if let Err(err) = self.flush() {
            self.items.pop();
            return Err(err);
        }
        tracing::info!(timestamp = %item.timestamp, total = self.items.len(), "item added");
        Ok(item)
    }

    /// Remove the entries at `indices`, returning how many were removed.
    ///
    /// Positions refer to the log before any removal. Duplicates and
    /// out-of-range positions are ignored.
    pub fn delete(&mut self, indices: &[usize]) -> Result<usize> {
        let targets: BTreeSet<usize> = indices
            .iter()
            .copied()
            .filter(|&idx| idx < self.items.len())
            .collect();
        if targets.is_empty() {
            return Ok(0);
        }

        let previous = self.items.clone();
        for &idx in targets.iter().rev() {
            self.items.remove(idx);
        }
        if let Err(err) = self.flush() {
            self.items = previous;
            return Err(err);
        }
        tracing::info!(removed = targets.len(), total = self.items.len(), "items deleted");
        Ok(targets.len())
    }

    fn flush(&self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.items)?;
        write_atomic(&self.path, &payload)
            .with_context(|| format!("writing item store {}", self.path.display()))
    }
}

/// Sibling file a store is staged in before it replaces `path`.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the file at `path` with `contents` without ever exposing a
/// partial write: the data goes to a sibling file which is then renamed
/// over the target. On failure the previous file is left as it was.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let staging = staging_path(path);
    fs::write(&staging, contents)
        .with_context(|| format!("staging {}", staging.display()))?;
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err).with_context(|| format!("replacing {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn stamp(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_764_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn missing_store_opens_empty() {
        let dir = TempDir::new().unwrap();
        let log = ItemLog::open(dir.path().join("items.json")).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn add_persists_in_insertion_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        let mut log = ItemLog::open(&path).unwrap();
        log.add_at(stamp(2)).unwrap();
        log.add_at(stamp(1)).unwrap();

        let reopened = ItemLog::open(&path).unwrap();
        let stamps: Vec<_> = reopened.items().iter().map(|i| i.timestamp).collect();
        assert_eq!(stamps, vec![stamp(2), stamp(1)]);
    }

    #[test]
    fn delete_uses_original_positions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        let mut log = ItemLog::open(&path).unwrap();
        for secs in 0..5 {
            log.add_at(stamp(secs)).unwrap();
        }

        let removed = log.delete(&[3, 1, 1, 42]).unwrap();
        assert_eq!(removed, 2);

        let reopened = ItemLog::open(&path).unwrap();
        let stamps: Vec<_> = reopened.items().iter().map(|i| i.timestamp).collect();
        assert_eq!(stamps, vec![stamp(0), stamp(2), stamp(4)]);
    }

    #[test]
    fn delete_nothing_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut log = ItemLog::open(dir.path().join("items.json")).unwrap();
        assert_eq!(log.delete(&[0]).unwrap(), 0);
        assert!(!log.path().exists());
    }

    #[test]
    fn failed_write_keeps_previous_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        let mut log = ItemLog::open(&path).unwrap();
        log.add_at(stamp(0)).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        // A directory squatting on the staging path makes the next write fail.
        fs::create_dir(staging_path(&path)).unwrap();
        assert!(log.add_at(stamp(1)).is_err());
        assert_eq!(log.len(), 1);

        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert_eq!(ItemLog::open(&path).unwrap().items(), log.items());
    }

    #[test]
    fn write_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        let mut log = ItemLog::open(&path).unwrap();
        log.add_at(stamp(0)).unwrap();
        log.add_at(stamp(1)).unwrap();
        assert!(path.exists());
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn corrupt_store_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, "{ broken").unwrap();
        let err = ItemLog::open(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing item store"));
    }
}
