//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the cache.
//!
//! # Tasks
//! - Cleanup Scheduler: Sweeps expired cache entries at a fixed interval

mod cleanup;

pub use cleanup::{spawn_cleanup_scheduler, CleanupHandle};
