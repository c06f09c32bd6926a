//! Cache Statistics Module
//!
//! Diagnostic snapshot of what the store physically holds.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of a cache store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of entries physically stored, expired or not
    pub total_entries: usize,
    /// Number of stored entries that are past due but not yet swept
    pub expired_entries: usize,
    /// Whether reads and writes are currently visible
    pub enabled: bool,
    /// Entries removed by cleanup sweeps over the store's lifetime
    pub removed_total: u64,
}

impl CacheStats {
    // == Live Entries ==
    /// Entries that a `get` would currently return, ignoring the enabled flag.
    pub fn live_entries(&self) -> usize {
        self.total_entries - self.expired_entries
    }

    // == Expired Ratio ==
    /// Share of stored entries awaiting a sweep.
    ///
    /// Returns 0.0 for an empty store.
    pub fn expired_ratio(&self) -> f64 {
        if self.total_entries == 0 {
            0.0
        } else {
            self.expired_entries as f64 / self.total_entries as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.expired_entries, 0);
        assert_eq!(stats.removed_total, 0);
        assert_eq!(stats.expired_ratio(), 0.0);
    }

    #[test]
    fn test_live_entries_and_ratio() {
        let stats = CacheStats {
            total_entries: 4,
            expired_entries: 1,
            enabled: true,
            removed_total: 7,
        };
        assert_eq!(stats.live_entries(), 3);
        assert_eq!(stats.expired_ratio(), 0.25);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats {
            total_entries: 2,
            expired_entries: 0,
            enabled: false,
            removed_total: 3,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_entries"], 2);
        assert_eq!(json["enabled"], false);
        assert_eq!(json["removed_total"], 3);
    }
}
