//! Cache Module
//!
//! Provides in-memory caching with lazy TTL expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub(crate) use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
