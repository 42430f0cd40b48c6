//! Feed loader — fetch, normalise, and memoise the row set for a fixed TTL.
//!
//! [`FeedLoader::load`] never fails: a feed outage comes back as an empty
//! row set tagged [`FeedStatus::Unavailable`] so callers stay renderable.
//! Only successful loads are cached.
//!
//! The cache slot is replaced wholesale; readers hold an `Arc<RowSet>` and
//! never see a partially updated set.

use crate::error::FeedError;
use crate::geojson::parse_feed;
use crate::source::{FeedSource, HttpFeedSource};
use seismo_core::config::FeedConfig;
use seismo_core::RowSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// Message shown in place of the views when the feed is down.
pub const ADVISORY: &str = "Unable to load earthquake data. Please try again later.";

/// How a [`Snapshot`] was produced.
#[derive(Debug)]
pub enum FeedStatus {
    /// Fetched from the source by this call.
    Fresh,
    /// Served from the cache without a fetch.
    Cached,
    /// The fetch failed; the row set is empty.
    Unavailable(FeedError),
}

/// One `load` result.
#[derive(Debug)]
pub struct Snapshot {
    pub rows: Arc<RowSet>,
    pub status: FeedStatus,
    /// Features dropped as malformed when these rows were fetched.
    pub skipped: usize,
}

impl Snapshot {
    fn unavailable(error: FeedError) -> Self {
        Self {
            rows: Arc::new(RowSet::empty()),
            status: FeedStatus::Unavailable(error),
            skipped: 0,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self.status, FeedStatus::Unavailable(_))
    }

    /// The user-facing advisory, if the feed was unavailable.
    pub fn advisory(&self) -> Option<&'static str> {
        self.is_unavailable().then_some(ADVISORY)
    }

    pub fn error(&self) -> Option<&FeedError> {
        match &self.status {
            FeedStatus::Unavailable(e) => Some(e),
            _ => None,
        }
    }
}

struct CachedRows {
    rows: Arc<RowSet>,
    skipped: usize,
    fetched_at: Instant,
}

/// Memoising loader over a [`FeedSource`].
pub struct FeedLoader<S = HttpFeedSource> {
    source: S,
    ttl: Duration,
    slot: Mutex<Option<CachedRows>>,
}

impl FeedLoader<HttpFeedSource> {
    /// Loader for the configured HTTP feed.
    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        Ok(Self::new(HttpFeedSource::new(config)?, config.cache_ttl()))
    }
}

impl<S: FeedSource> FeedLoader<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the cached rows while they are younger than the TTL, otherwise
    /// fetch and normalise the feed.
    pub async fn load(&self) -> Snapshot {
        if let Some(hit) = self.cached() {
            tracing::trace!(rows = hit.rows.len(), "feed cache hit");
            return hit;
        }

        let result = self
            .source
            .fetch()
            .await
            .and_then(|bytes| parse_feed(&bytes).map_err(FeedError::from));

        match result {
            Ok(normalized) => {
                let rows = Arc::new(normalized.rows);
                tracing::info!(rows = rows.len(), skipped = normalized.skipped, "feed loaded");
                *self.lock() = Some(CachedRows {
                    rows: Arc::clone(&rows),
                    skipped: normalized.skipped,
                    fetched_at: Instant::now(),
                });
                Snapshot {
                    rows,
                    status: FeedStatus::Fresh,
                    skipped: normalized.skipped,
                }
            }
            Err(error) => {
                tracing::warn!(%error, "feed unavailable");
                Snapshot::unavailable(error)
            }
        }
    }

    /// Peek at the cache without fetching. `None` when empty or expired.
    pub fn cached(&self) -> Option<Snapshot> {
        let slot = self.lock();
        let cached = slot.as_ref()?;
        if cached.fetched_at.elapsed() >= self.ttl {
            return None;
        }
        Some(Snapshot {
            rows: Arc::clone(&cached.rows),
            status: FeedStatus::Cached,
            skipped: cached.skipped,
        })
    }

    /// Drop the cached rows so the next [`load`](Self::load) fetches.
    pub fn invalidate(&self) {
        self.lock().take();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<CachedRows>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
