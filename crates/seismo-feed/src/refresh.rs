//! Background refresh — periodically invalidates the loader, reloads, and
//! signals subscribers to re-render.
//!
//! The refresh runs on its own tokio task, so callers keep serving while it
//! waits. Each completed reload is published on a `watch` channel; a slow
//! subscriber only ever sees the latest update.

use crate::loader::{FeedLoader, Snapshot};
use crate::source::FeedSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// One completed background reload.
#[derive(Debug, Clone)]
pub struct RefreshUpdate {
    /// Starts at 1 and increases by one per reload.
    pub generation: u64,
    pub snapshot: Arc<Snapshot>,
}

/// Handle to a running refresh task. Dropping it stops the task.
pub struct Refresher {
    task: JoinHandle<()>,
    updates: watch::Receiver<Option<RefreshUpdate>>,
}

impl Refresher {
    /// Start refreshing `loader` every `interval`. The first reload happens
    /// one full interval after the call.
    pub fn spawn<S>(loader: Arc<FeedLoader<S>>, interval: Duration) -> Self
    where
        S: FeedSource + 'static,
    {
        let (tx, updates) = watch::channel(None);

        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + interval;
            let mut ticker = tokio::time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut generation = 0u64;

            loop {
                ticker.tick().await;
                loader.invalidate();
                let snapshot = loader.load().await;
                generation += 1;
                tracing::debug!(
                    generation,
                    rows = snapshot.rows.len(),
                    unavailable = snapshot.is_unavailable(),
                    "background refresh complete"
                );

                let update = RefreshUpdate {
                    generation,
                    snapshot: Arc::new(snapshot),
                };
                if tx.send(Some(update)).is_err() {
                    tracing::debug!("no refresh subscribers left, stopping");
                    break;
                }
            }
        });

        Self { task, updates }
    }

    /// Another receiver for the re-render signal.
    pub fn subscribe(&self) -> watch::Receiver<Option<RefreshUpdate>> {
        self.updates.clone()
    }

    /// Wait for the next reload. `None` once the task has stopped.
    pub async fn next(&mut self) -> Option<RefreshUpdate> {
        self.updates.changed().await.ok()?;
        self.updates.borrow_and_update().clone()
    }
}

impl Drop for Refresher {
    fn drop(&mut self) {
        self.task.abort();
    }
}
