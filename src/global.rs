//! Process-wide default cache
//!
//! An optional single cache instance shared by a whole process. It is
//! installed at most once, either explicitly through [`init`] or lazily by
//! the first call to [`default_cache`]. Code that needs to be tested against
//! its own instance should take a `&CacheStore<_>` instead of calling
//! [`default_cache`] directly.

use std::sync::OnceLock;

use tracing::info;

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};

/// Default cache holding opaque JSON payloads.
pub type SharedCache = CacheStore<serde_json::Value>;

static DEFAULT_CACHE: OnceLock<SharedCache> = OnceLock::new();

/// Installs `cache` as the process-wide default.
///
/// # Errors
/// [`CacheError::AlreadyInitialized`] if a default is already installed,
/// including one created lazily by [`default_cache`].
pub fn init(cache: SharedCache) -> Result<()> {
    DEFAULT_CACHE
        .set(cache)
        .map_err(|_| CacheError::AlreadyInitialized)?;
    info!("Default cache installed");
    Ok(())
}

/// Returns the process-wide default cache, creating an empty one on first use.
pub fn default_cache() -> &'static SharedCache {
    DEFAULT_CACHE.get_or_init(|| {
        info!("Default cache created");
        SharedCache::new()
    })
}

/// Whether a default cache has been installed or created.
pub fn is_initialized() -> bool {
    DEFAULT_CACHE.get().is_some()
}
