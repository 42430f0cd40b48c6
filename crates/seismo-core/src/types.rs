//! Core types for seismo-core.
//!
//! This module defines the data shared by every layer: the normalised
//! [`Event`], the ordered [`RowSet`] the feed loader produces, the
//! [`FilterCriteria`] a user selects, and the [`SortOrder`] used for display.

use chrono::{DateTime, Utc};

/// One earthquake record, normalised from a single feed feature.
///
/// Numeric fields the feed may omit are `Option`s and are never defaulted to
/// zero: a zero magnitude would pass most magnitude filters and skew the
/// depth/magnitude regression.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Free-text location label, e.g. `"10 km SSW of Idyllwild, CA"`.
    pub place: Option<String>,
    /// Event magnitude, typically in `[-2, 10]`.
    pub magnitude: Option<f64>,
    /// Origin time (UTC), millisecond precision.
    pub occurred_at: DateTime<Utc>,
    /// Degrees, `[-180, 180]`.
    pub longitude: f64,
    /// Degrees, `[-90, 90]`.
    pub latitude: f64,
    /// Kilometres below the reference datum; negative means above it.
    pub depth_km: Option<f64>,
}

/// Convert a feed timestamp (milliseconds since the Unix epoch) to UTC.
///
/// Returns `None` when the value is outside chrono's representable range.
pub fn occurred_at_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Inverse of [`occurred_at_from_millis`].
pub fn to_millis(ts: DateTime<Utc>) -> i64 {
    ts.timestamp_millis()
}

/// Ordered sequence of [`Event`]s in feed order.
///
/// Feed order is not chronological. A `RowSet` is never mutated after it is
/// built; refreshing the feed replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet(Vec<Event>);

impl RowSet {
    pub fn new(events: Vec<Event>) -> Self {
        Self(events)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Event> {
        self.0
    }

    /// Latest `occurred_at` in the set, if any.
    pub fn latest(&self) -> Option<DateTime<Utc>> {
        self.0.iter().map(|e| e.occurred_at).max()
    }

    /// Earliest `occurred_at` in the set, if any.
    pub fn earliest(&self) -> Option<DateTime<Utc>> {
        self.0.iter().map(|e| e.occurred_at).min()
    }
}

impl From<Vec<Event>> for RowSet {
    fn from(events: Vec<Event>) -> Self {
        Self(events)
    }
}

impl FromIterator<Event> for RowSet {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RowSet {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Magnitude and time-range selection. Both ranges are inclusive.
///
/// Inverted bounds are accepted as given; they simply match nothing. Fields
/// are private so a value cannot change after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    min_magnitude: f64,
    max_magnitude: f64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

impl FilterCriteria {
    pub fn new(
        min_magnitude: f64,
        max_magnitude: f64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            min_magnitude,
            max_magnitude,
            start_time,
            end_time,
        }
    }

    pub fn min_magnitude(&self) -> f64 {
        self.min_magnitude
    }

    pub fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    /// Copy with a different magnitude range.
    pub fn with_magnitude(self, min_magnitude: f64, max_magnitude: f64) -> Self {
        Self {
            min_magnitude,
            max_magnitude,
            ..self
        }
    }

    /// Copy with a different time window.
    pub fn with_window(self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
            ..self
        }
    }
}

/// Chronological display order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    LatestFirst,
    OldestFirst,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::LatestFirst => write!(f, "latest"),
            SortOrder::OldestFirst => write!(f, "oldest"),
        }
    }
}
