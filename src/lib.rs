// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tapaterra: world flags by continent, in English and Polish.
//!
//! The crate is the model behind a flag-learning app:
//!
//! 1. **i18n**: compiled-in translation tables and an explicitly constructed
//!    [`i18n::LanguageStore`] that owns the current language, persists it,
//!    and notifies subscribers when it changes.
//! 2. **catalog**: the immutable country list, continent filtering, name
//!    search and the per-country details index joined by ISO code.
//! 3. **storage**: the persisted, timestamped item log.
//!
//! Views in [`render`] are plain functions of that state.

pub mod catalog;
pub mod config;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod preferences;
pub mod render;
pub mod splash;
pub mod state;
pub mod storage;
pub mod types;
