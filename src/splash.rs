// SPDX-License-Identifier: PMPL-1.0-or-later

//! Splash sequence shown before the main view.
//!
//! The splash is a fixed list of featured flags plus a single one-shot
//! timer. When the timer fires the main view takes over. The timer can be
//! cancelled, which suppresses the firing entirely.

use crate::catalog::CountryCatalog;
use crate::i18n::LanguageStore;
use crate::types::Country;
use std::time::{Duration, Instant};

/// How long the splash stays up.
pub const SPLASH_DURATION: Duration = Duration::from_secs(6);

/// Featured flags as `(ISO code, translation key)`, in display order.
pub const FEATURED: &[(&str, &str)] = &[
    ("US", "countries.usa"),
    ("PL", "countries.poland"),
    ("JP", "countries.japan"),
    ("BR", "countries.brazil"),
    ("ZA", "countries.south_africa"),
    ("FR", "countries.france"),
    ("IN", "countries.india"),
    ("CA", "countries.canada"),
    ("AU", "countries.australia"),
    ("AR", "countries.argentina"),
];

/// A featured flag with its name in the current language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedFlag<'a> {
    pub country: &'a Country,
    pub label: String,
}

/// Resolve the featured flags against `catalog`. Codes the catalog does not
/// carry are skipped.
pub fn featured<'a>(catalog: &'a CountryCatalog, store: &LanguageStore) -> Vec<FeaturedFlag<'a>> {
    FEATURED
        .iter()
        .filter_map(|&(iso, key)| {
            catalog.find(iso).map(|country| FeaturedFlag {
                country,
                label: store.get(key),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Idle,
    Armed(Instant),
    Fired,
    Cancelled,
}

/// One-shot timer that hands control to the main view.
#[derive(Debug, Clone)]
pub struct SplashTimer {
    duration: Duration,
    state: TimerState,
}

impl SplashTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            state: TimerState::Idle,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Arm the timer. Re-arming an armed timer is ignored.
    pub fn start(&mut self, now: Instant) {
        if self.state == TimerState::Idle {
            self.state = TimerState::Armed(now + self.duration);
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self.state, TimerState::Idle | TimerState::Armed(_)) {
            self.state = TimerState::Cancelled;
        }
    }

    /// Time left before firing, zero once due, `None` if not armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            TimerState::Armed(deadline) => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Returns `true` exactly once: the first poll at or after the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.state {
            TimerState::Armed(deadline) if now >= deadline => {
                self.state = TimerState::Fired;
                true
            }
            _ => false,
        }
    }

    /// Block the current thread until the timer fires. Returns `false`
    /// without waiting when the timer was never armed or was cancelled.
    pub fn wait(&mut self) -> bool {
        let Some(remaining) = self.remaining(Instant::now()) else {
            return false;
        };
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        // `sleep` may return marginally early on some platforms.
        loop {
            if self.fire_if_due(Instant::now()) {
                return true;
            }
            std::thread::yield_now();
        }
    }
}

impl Default for SplashTimer {
    fn default() -> Self {
        Self::new(SPLASH_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;

    #[test]
    fn all_featured_flags_exist() {
        let catalog = CountryCatalog::new();
        let store = LanguageStore::fixed(Lang::En);
        let flags = featured(&catalog, &store);
        assert_eq!(flags.len(), FEATURED.len());
        assert_eq!(flags[0].label, "United States");
        assert_eq!(flags[1].country.name, "Poland");
    }

    #[test]
    fn featured_labels_follow_language() {
        let catalog = CountryCatalog::new();
        let store = LanguageStore::fixed(Lang::Pl);
        let flags = featured(&catalog, &store);
        assert_eq!(flags[1].label, "Polska");
    }

    #[test]
    fn timer_fires_once_after_deadline() {
        let start = Instant::now();
        let mut timer = SplashTimer::new(Duration::from_secs(6));
        assert!(!timer.fire_if_due(start));
        timer.start(start);
        assert_eq!(timer.remaining(start), Some(Duration::from_secs(6)));
        assert!(!timer.fire_if_due(start + Duration::from_secs(5)));
        assert!(timer.fire_if_due(start + Duration::from_secs(6)));
        assert!(!timer.fire_if_due(start + Duration::from_secs(7)));
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = SplashTimer::default();
        timer.start(start);
        timer.cancel();
        assert!(!timer.fire_if_due(start + SPLASH_DURATION * 2));
        assert!(!timer.wait());
    }

    #[test]
    fn zero_duration_wait_returns_immediately() {
        let mut timer = SplashTimer::new(Duration::ZERO);
        timer.start(Instant::now());
        assert!(timer.wait());
        assert!(!timer.wait());
    }
}
