//! seismo-feed — earthquake feed loader for seismoscope.
//!
//! A [`FeedSource`] fetches raw payload bytes, the [`geojson`] normalizer
//! turns them into a [`seismo_core::RowSet`], and [`FeedLoader`] memoises the
//! result for the configured TTL. [`Refresher`] reloads on a timer in the
//! background and signals subscribers over a `tokio::sync::watch` channel.

pub mod error;
pub mod geojson;
pub mod loader;
pub mod refresh;
pub mod source;

pub use error::{FeedError, RecordError};
pub use loader::{FeedLoader, FeedStatus, Snapshot, ADVISORY};
pub use refresh::{RefreshUpdate, Refresher};
pub use source::{FeedSource, HttpFeedSource};
