//! TTL Cache - A process-wide in-memory cache
//!
//! Provides a shared key-value store with lazy TTL expiration, a runtime
//! enable/disable switch and a cancellable background cleanup scheduler.

pub mod cache;
pub mod config;
pub mod error;
pub mod global;
pub mod tasks;

pub use cache::{CacheStats, CacheStore};
pub use config::{Config, DataCategory, TtlPresets};
pub use error::{CacheError, Result};
pub use tasks::{spawn_cleanup_scheduler, CleanupHandle};
