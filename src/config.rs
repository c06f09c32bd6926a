//! Configuration Module
//!
//! Recommended TTLs per data category and the cleanup cadence, loaded from
//! environment variables.

use std::env;
use std::time::Duration;

// == Default TTL Presets ==
/// Recommended lifetime for issue data
pub const DEFAULT_ISSUE_TTL: Duration = Duration::from_secs(5 * 60);

/// Recommended lifetime for comment data
pub const DEFAULT_COMMENT_TTL: Duration = Duration::from_secs(5 * 60);

/// Recommended lifetime for metadata (labels, milestones, users)
pub const DEFAULT_METADATA_TTL: Duration = Duration::from_secs(30 * 60);

/// Recommended lifetime for database-backed data
pub const DEFAULT_DATABASE_TTL: Duration = Duration::from_secs(10 * 60);

/// Recommended lifetime for plugin data
pub const DEFAULT_PLUGIN_TTL: Duration = Duration::from_secs(60 * 60);

/// Default interval between cleanup sweeps
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

// == Data Category ==
/// Kind of data a caller is about to cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataCategory {
    Issue,
    Comment,
    Metadata,
    Database,
    Plugin,
}

// == TTL Presets ==
/// One recommended TTL per data category. Every value is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPresets {
    pub issue: Duration,
    pub comment: Duration,
    pub metadata: Duration,
    pub database: Duration,
    pub plugin: Duration,
}

impl TtlPresets {
    /// Returns the TTL to use when storing data of `category`.
    pub fn ttl_for(&self, category: DataCategory) -> Duration {
        match category {
            DataCategory::Issue => self.issue,
            DataCategory::Comment => self.comment,
            DataCategory::Metadata => self.metadata,
            DataCategory::Database => self.database,
            DataCategory::Plugin => self.plugin,
        }
    }

    /// Loads presets from environment variables, falling back to defaults.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_ISSUE_SECS` (default: 300)
    /// - `CACHE_TTL_COMMENT_SECS` (default: 300)
    /// - `CACHE_TTL_METADATA_SECS` (default: 1800)
    /// - `CACHE_TTL_DATABASE_SECS` (default: 600)
    /// - `CACHE_TTL_PLUGIN_SECS` (default: 3600)
    pub fn from_env() -> Self {
        Self {
            issue: env_secs("CACHE_TTL_ISSUE_SECS", DEFAULT_ISSUE_TTL),
            comment: env_secs("CACHE_TTL_COMMENT_SECS", DEFAULT_COMMENT_TTL),
            metadata: env_secs("CACHE_TTL_METADATA_SECS", DEFAULT_METADATA_TTL),
            database: env_secs("CACHE_TTL_DATABASE_SECS", DEFAULT_DATABASE_TTL),
            plugin: env_secs("CACHE_TTL_PLUGIN_SECS", DEFAULT_PLUGIN_TTL),
        }
    }
}

impl Default for TtlPresets {
    fn default() -> Self {
        Self {
            issue: DEFAULT_ISSUE_TTL,
            comment: DEFAULT_COMMENT_TTL,
            metadata: DEFAULT_METADATA_TTL,
            database: DEFAULT_DATABASE_TTL,
            plugin: DEFAULT_PLUGIN_TTL,
        }
    }
}

/// Cache configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Recommended TTL per data category
    pub ttl: TtlPresets,
    /// Interval between background cleanup sweeps
    pub cleanup_interval: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Besides the [`TtlPresets::from_env`] variables, reads
    /// `CACHE_CLEANUP_INTERVAL_SECS` (default: 60).
    pub fn from_env() -> Self {
        Self {
            ttl: TtlPresets::from_env(),
            cleanup_interval: env_secs("CACHE_CLEANUP_INTERVAL_SECS", DEFAULT_CLEANUP_INTERVAL),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl: TtlPresets::default(),
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
        }
    }
}

/// Reads a positive number of seconds; missing, unparsable and zero values
/// all yield `default`.
fn env_secs(name: &str, default: Duration) -> Duration {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cleanup_interval, Duration::from_secs(60));
        assert_eq!(config.ttl.issue, Duration::from_secs(300));
        assert_eq!(config.ttl.comment, Duration::from_secs(300));
        assert_eq!(config.ttl.metadata, Duration::from_secs(1800));
        assert_eq!(config.ttl.database, Duration::from_secs(600));
        assert_eq!(config.ttl.plugin, Duration::from_secs(3600));
    }

    #[test]
    fn test_ttl_for_category() {
        let presets = TtlPresets::default();
        assert_eq!(presets.ttl_for(DataCategory::Issue), DEFAULT_ISSUE_TTL);
        assert_eq!(presets.ttl_for(DataCategory::Comment), DEFAULT_COMMENT_TTL);
        assert_eq!(presets.ttl_for(DataCategory::Metadata), DEFAULT_METADATA_TTL);
        assert_eq!(presets.ttl_for(DataCategory::Database), DEFAULT_DATABASE_TTL);
        assert_eq!(presets.ttl_for(DataCategory::Plugin), DEFAULT_PLUGIN_TTL);
    }

    #[test]
    fn test_presets_are_positive() {
        let presets = TtlPresets::default();
        for category in [
            DataCategory::Issue,
            DataCategory::Comment,
            DataCategory::Metadata,
            DataCategory::Database,
            DataCategory::Plugin,
        ] {
            assert!(!presets.ttl_for(category).is_zero());
        }
    }

    // Each test uses its own variable so parallel tests don't race on the
    // process environment
    #[test]
    fn test_env_secs_parses_value() {
        env::set_var("CACHE_TEST_PARSE_SECS", " 42 ");
        assert_eq!(
            env_secs("CACHE_TEST_PARSE_SECS", Duration::from_secs(1)),
            Duration::from_secs(42)
        );
        env::remove_var("CACHE_TEST_PARSE_SECS");
    }

    #[test]
    fn test_env_secs_rejects_zero_and_garbage() {
        env::set_var("CACHE_TEST_ZERO_SECS", "0");
        env::set_var("CACHE_TEST_GARBAGE_SECS", "soon");
        assert_eq!(
            env_secs("CACHE_TEST_ZERO_SECS", Duration::from_secs(7)),
            Duration::from_secs(7)
        );
        assert_eq!(
            env_secs("CACHE_TEST_GARBAGE_SECS", Duration::from_secs(7)),
            Duration::from_secs(7)
        );
        assert_eq!(
            env_secs("CACHE_TEST_MISSING_SECS", Duration::from_secs(7)),
            Duration::from_secs(7)
        );
        env::remove_var("CACHE_TEST_ZERO_SECS");
        env::remove_var("CACHE_TEST_GARBAGE_SECS");
    }
}
