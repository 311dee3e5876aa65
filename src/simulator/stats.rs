//! Replay statistics tracking.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Counters accumulated over one simulation run.
///
/// Every reference is exactly one hit or one miss. An eviction is a miss that
/// displaced a resident page (a miss into an empty slot is not one).
///
/// # Example
/// ```
/// use pagesim::ReplayStats;
///
/// let mut stats = ReplayStats::new();
/// stats.record_miss(false);
/// stats.record_hit();
/// assert_eq!(stats.hit_rate(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl ReplayStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub fn record_miss(&mut self, evicted: bool) {
        self.misses += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Total references seen.
    #[inline]
    pub fn references(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate as a percentage (0.0 to 100.0).
    ///
    /// Returns 0.0 before any reference is recorded.
    pub fn hit_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }
}

impl fmt::Display for ReplayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.misses,
            self.evictions,
            self.hit_rate()
        )
    }
}
