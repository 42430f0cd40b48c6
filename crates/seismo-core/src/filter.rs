//! Filter engine — selects the rows every view renders from.
//!
//! [`filter`] is a pure function: same inputs, same output, and the output is
//! always an order-preserving subsequence of the input. Chronological
//! ordering for display is a separate step ([`sort_rows`]) that never changes
//! which rows are included.

use crate::config::FilterConfig;
use crate::types::{Event, FilterCriteria, RowSet, SortOrder};
use chrono::{DateTime, Duration, Utc};

/// Return the rows of `rows` that satisfy every bound in `criteria`.
///
/// A row without a magnitude never matches. Inverted bounds are not repaired
/// and yield an empty set.
pub fn filter(rows: &RowSet, criteria: &FilterCriteria) -> RowSet {
    rows.iter().filter(|e| matches(e, criteria)).cloned().collect()
}

/// Whether a single event satisfies `criteria`.
pub fn matches(event: &Event, criteria: &FilterCriteria) -> bool {
    // NaN fails both comparisons, so it is excluded like a missing value.
    let magnitude_ok = event
        .magnitude
        .is_some_and(|m| criteria.min_magnitude() <= m && m <= criteria.max_magnitude());

    magnitude_ok
        && criteria.start_time() <= event.occurred_at
        && event.occurred_at <= criteria.end_time()
}

/// Stable chronological re-ordering of `rows`.
pub fn sort_rows(rows: &RowSet, order: SortOrder) -> RowSet {
    let mut events = rows.as_slice().to_vec();
    match order {
        SortOrder::LatestFirst => events.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at)),
        SortOrder::OldestFirst => events.sort_by(|a, b| a.occurred_at.cmp(&b.occurred_at)),
    }
    RowSet::new(events)
}

impl FilterCriteria {
    /// Criteria the dashboard opens with: the configured lookback window
    /// ending at the latest event in `rows`, and the configured magnitude
    /// range. `None` when `rows` is empty.
    ///
    /// A lookback reaching past the representable range opens the window at
    /// the earliest representable time.
    pub fn defaults_for(rows: &RowSet, config: &FilterConfig) -> Option<Self> {
        let end = rows.latest()?;
        let start = Duration::try_hours(config.lookback_hours)
            .and_then(|lookback| end.checked_sub_signed(lookback))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Some(Self::new(
            config.min_magnitude,
            config.max_magnitude,
            start,
            end,
        ))
    }
}
