//! Cleanup Scheduler
//!
//! Background task that periodically sweeps expired entries from a cache
//! store until it is told to stop.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};

// == Cleanup Handle ==
/// Stop handle for a running cleanup scheduler.
///
/// Stopping is idempotent: every call after the first is a no-op. Dropping
/// the handle stops the scheduler as well.
#[derive(Debug)]
#[must_use = "dropping the handle stops the cleanup scheduler"]
pub struct CleanupHandle {
    stop_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl CleanupHandle {
    // == Stop ==
    /// Signals the scheduler to exit.
    ///
    /// No sweep starts after the signal is observed; a sweep already running
    /// is allowed to finish.
    pub fn stop(&self) {
        if !self.stop_tx.send_replace(true) {
            debug!("Stop signal sent to cleanup scheduler");
        }
    }

    /// Whether a stop has been signalled.
    pub fn is_stopped(&self) -> bool {
        *self.stop_tx.borrow()
    }

    /// Whether the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    // == Join ==
    /// Stops the scheduler and waits for the background task to exit.
    pub async fn join(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            // A join error only means the task panicked or was aborted
            let _ = task.await;
        }
    }
}

impl Drop for CleanupHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawns a background task that calls [`CacheStore::cleanup`] on every tick
/// of `interval`.
///
/// The first sweep happens one full `interval` after the start, not
/// immediately.
///
/// # Errors
/// - [`CacheError::InvalidInterval`] if `interval` is zero
/// - [`CacheError::NoRuntime`] if called outside a tokio runtime
///
/// # Example
/// ```ignore
/// let cache: CacheStore<String> = CacheStore::new();
/// let handle = spawn_cleanup_scheduler(cache.clone(), Duration::from_secs(60))?;
/// // Later, during shutdown:
/// handle.stop();
/// ```
pub fn spawn_cleanup_scheduler<V: Send + 'static>(
    store: CacheStore<V>,
    interval: Duration,
) -> Result<CleanupHandle> {
    if interval.is_zero() {
        return Err(CacheError::InvalidInterval(interval));
    }
    let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

    let (stop_tx, stop_rx) = watch::channel(false);
    let task = runtime.spawn(run_scheduler(store, interval, stop_rx));

    Ok(CleanupHandle {
        stop_tx,
        task: Some(task),
    })
}

async fn run_scheduler<V>(
    store: CacheStore<V>,
    interval: Duration,
    mut stop_rx: watch::Receiver<bool>,
) {
    info!("Starting cache cleanup scheduler with interval of {:?}", interval);

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    ticker.tick().await;

    loop {
        tokio::select! {
            // Stop wins over a tick that is ready at the same time
            biased;

            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    break;
                }
            }
            _ = ticker.tick() => {
                let removed = store.cleanup();
                if removed > 0 {
                    info!("Cache cleanup: removed {} expired entries", removed);
                } else {
                    debug!("Cache cleanup: no expired entries found");
                }
            }
        }
    }

    info!("Cache cleanup scheduler stopped");
}
