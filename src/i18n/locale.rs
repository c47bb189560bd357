// SPDX-License-Identifier: PMPL-1.0-or-later

//! Host locale detection.
//!
//! POSIX locale variables look like `pl_PL.UTF-8`, `en_GB`, `C` or
//! `POSIX`. Only the language part matters here; anything we do not ship a
//! catalog for resolves to `None` so the caller can pick its default.

use super::catalog::Lang;

/// Environment variables consulted, in precedence order.
pub const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Extract a supported language from a locale string.
///
/// # Examples
///
/// ```
/// use tapaterra::i18n::{lang_from_locale, Lang};
/// assert_eq!(lang_from_locale("pl_PL.UTF-8"), Some(Lang::Pl));
/// assert_eq!(lang_from_locale("en-US"), Some(Lang::En));
/// assert_eq!(lang_from_locale("de_DE"), None);
/// ```
pub fn lang_from_locale(locale: &str) -> Option<Lang> {
    let base = locale.split(['.', '@']).next().unwrap_or_default();
    let language = base.split(['_', '-']).next().unwrap_or_default();
    if language.len() != 2 {
        return None;
    }
    Lang::from_code(language)
}

/// Resolve the host locale from an arbitrary variable source.
///
/// The first variable that is set and non-empty decides, whether or not it
/// names a supported language. This mirrors how libc resolves `LC_ALL`
/// over `LANG`.
pub fn detect_with<F>(mut var: F) -> Option<Lang>
where
    F: FnMut(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|name| var(name))
        .find(|value| !value.trim().is_empty())
        .and_then(|value| lang_from_locale(value.trim()))
}

/// Resolve the host locale from the process environment.
pub fn detect_host_lang() -> Option<Lang> {
    detect_with(|name| std::env::var(name).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl FnMut(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn parses_common_locale_shapes() {
        assert_eq!(lang_from_locale("pl"), Some(Lang::Pl));
        assert_eq!(lang_from_locale("pl_PL"), Some(Lang::Pl));
        assert_eq!(lang_from_locale("pl_PL.UTF-8"), Some(Lang::Pl));
        assert_eq!(lang_from_locale("en_US.UTF-8@euro"), Some(Lang::En));
        assert_eq!(lang_from_locale("C"), None);
        assert_eq!(lang_from_locale("POSIX"), None);
        assert_eq!(lang_from_locale(""), None);
    }

    #[test]
    fn lc_all_wins_over_lang() {
        let detected = detect_with(env(&[("LC_ALL", "pl_PL.UTF-8"), ("LANG", "en_US.UTF-8")]));
        assert_eq!(detected, Some(Lang::Pl));
    }

    #[test]
    fn empty_variables_are_skipped() {
        let detected = detect_with(env(&[("LC_ALL", ""), ("LANG", "pl_PL")]));
        assert_eq!(detected, Some(Lang::Pl));
    }

    #[test]
    fn unsupported_first_variable_decides() {
        let detected = detect_with(env(&[("LC_MESSAGES", "fr_FR"), ("LANG", "pl_PL")]));
        assert_eq!(detected, None);
    }

    #[test]
    fn nothing_set_is_none() {
        assert_eq!(detect_with(env(&[])), None);
    }
}
