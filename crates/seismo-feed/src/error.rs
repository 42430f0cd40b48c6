//! Error types for the feed loader.

use std::time::Duration;

/// The feed could not be loaded at all. Surfaced to callers as an advisory,
/// never as a panic.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed request timed out after {0:?}")]
    Timeout(Duration),
    #[error("feed request failed: {0}")]
    Request(String),
    #[error("feed returned HTTP {0}")]
    Status(u16),
    #[error("feed payload is not a feature collection: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single feature could not be turned into an event. The feature is
/// skipped and the rest of the feed is kept.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("unexpected feature shape: {0}")]
    Shape(#[from] serde_json::Error),
    #[error("feature has no geometry")]
    MissingGeometry,
    #[error("geometry has {0} coordinates, expected 3")]
    ShortCoordinates(usize),
    #[error("{0} coordinate is null")]
    MissingCoordinate(&'static str),
    #[error("feature has no time")]
    MissingTime,
    #[error("time {0} ms is out of range")]
    TimeOutOfRange(i64),
}
