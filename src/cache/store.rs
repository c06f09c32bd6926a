//! Cache Store Module
//!
//! Shared key-value storage with per-entry absolute expiration and a global
//! visibility switch. Expiration is lazy: `get` hides expired entries but
//! only `cleanup` removes them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::Result;
use crate::tasks::{spawn_cleanup_scheduler, CleanupHandle};

// == Store State ==
/// Everything guarded by the store's single lock.
#[derive(Debug)]
struct StoreState<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Gates `get` and `set` only
    enabled: bool,
    /// Entries removed by cleanup sweeps
    removed_total: u64,
}

// == Cache Store ==
/// Concurrency-safe cache with lazy TTL expiration.
///
/// Cloning is cheap and every clone refers to the same underlying store.
/// Each operation holds one coarse lock for its whole duration, so operations
/// are atomic with respect to each other. No operation blocks while holding it.
#[derive(Debug)]
pub struct CacheStore<V> {
    state: Arc<Mutex<StoreState<V>>>,
}

impl<V> Clone for CacheStore<V> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty, enabled store.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState {
                entries: HashMap::new(),
                enabled: true,
                removed_total: 0,
            })),
        }
    }

    /// Every mutation leaves the state consistent before anything that could
    /// panic, so a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, StoreState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Set ==
    /// Stores a value under `key`, expiring `ttl` from now.
    ///
    /// Overwrites any existing entry for the key. While the store is disabled
    /// the value is dropped. A zero `ttl` stores an entry that is already
    /// expired.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let mut state = self.lock();
        if !state.enabled {
            return;
        }
        let entry = CacheEntry::new(value, ttl, Instant::now());
        state.entries.insert(key.into(), entry);
    }

    // == Delete ==
    /// Removes the entry for `key`, returning whether one was present.
    ///
    /// Applies regardless of the enabled flag.
    pub fn delete(&self, key: &str) -> bool {
        self.lock().entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry. Applies regardless of the enabled flag.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    // == Length ==
    /// Number of entries physically stored, including expired ones not yet
    /// swept.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    // == Enable / Disable ==
    /// Makes stored entries visible to `get` and lets `set` store again.
    pub fn enable(&self) {
        self.lock().enabled = true;
        debug!("Cache enabled");
    }

    /// Hides all entries from `get` and turns `set` into a no-op.
    ///
    /// Stored entries are kept and become visible again on `enable`.
    pub fn disable(&self) {
        self.lock().enabled = false;
        debug!("Cache disabled");
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    // == Cleanup ==
    /// Removes every entry that has expired as of the call, returning the
    /// number removed. Applies regardless of the enabled flag.
    pub fn cleanup(&self) -> usize {
        let mut state = self.lock();
        let now = Instant::now();
        let before = state.entries.len();
        state.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - state.entries.len();
        state.removed_total += removed as u64;
        removed
    }

    // == Time To Live ==
    /// Time left before `key` expires, under the same visibility rules as
    /// `get`. Entries whose deadline overflowed report `Duration::MAX`.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        let state = self.lock();
        if !state.enabled {
            return None;
        }
        let now = Instant::now();
        state
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.ttl_remaining_at(now))
    }

    // == Stats ==
    /// Returns a snapshot of the store without modifying it.
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        let now = Instant::now();
        CacheStats {
            total_entries: state.entries.len(),
            expired_entries: state
                .entries
                .values()
                .filter(|entry| entry.is_expired_at(now))
                .count(),
            enabled: state.enabled,
            removed_total: state.removed_total,
        }
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Returns `None` when the store is disabled, the key was never set, or
    /// the entry has expired. An expired entry is left in place for
    /// `cleanup` to remove.
    pub fn get(&self, key: &str) -> Option<V> {
        let state = self.lock();
        if !state.enabled {
            return None;
        }
        let now = Instant::now();
        state
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.value.clone())
    }
}

impl<V: Send + 'static> CacheStore<V> {
    // == Cleanup Scheduler ==
    /// Starts a background task sweeping this store every `interval`.
    ///
    /// See [`spawn_cleanup_scheduler`].
    pub fn start_cleanup_scheduler(&self, interval: Duration) -> Result<CleanupHandle> {
        spawn_cleanup_scheduler(self.clone(), interval)
    }
}
