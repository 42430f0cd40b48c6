//! Test builders — ergonomic constructors for `Event`, `RowSet`, and criteria.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, Utc};
use seismo_core::types::occurred_at_from_millis;
use seismo_core::{Event, FilterCriteria, RowSet};

// ---------------------------------------------------------------------------
// EventBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Event`] test fixtures.
///
/// ```rust
/// let event = EventBuilder::new()
///     .place("Ridgecrest, CA")
///     .magnitude(2.7)
///     .at_secs(3_600)
///     .build();
/// ```
pub struct EventBuilder {
    place: Option<String>,
    magnitude: Option<f64>,
    occurred_at: DateTime<Utc>,
    longitude: f64,
    latitude: f64,
    depth_km: Option<f64>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            place: Some("test place".to_string()),
            magnitude: Some(3.0),
            occurred_at: at(0),
            longitude: -117.6,
            latitude: 35.7,
            depth_km: Some(10.0),
        }
    }

    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn no_magnitude(mut self) -> Self {
        self.magnitude = None;
        self
    }

    pub fn at_secs(mut self, secs: i64) -> Self {
        self.occurred_at = at(secs);
        self
    }

    pub fn coords(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    pub fn depth(mut self, depth_km: Option<f64>) -> Self {
        self.depth_km = depth_km;
        self
    }

    pub fn build(self) -> Event {
        Event {
            place: self.place,
            magnitude: self.magnitude,
            occurred_at: self.occurred_at,
            longitude: self.longitude,
            latitude: self.latitude,
            depth_km: self.depth_km,
        }
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// UTC instant `secs` seconds after the Unix epoch.
pub fn at(secs: i64) -> DateTime<Utc> {
    occurred_at_from_millis(secs * 1000).expect("test time in range")
}

/// Event with a magnitude (or none) at `secs`.
pub fn quake(magnitude: Option<f64>, secs: i64) -> Event {
    let builder = EventBuilder::new().at_secs(secs).place(format!("quake@{secs}"));
    match magnitude {
        Some(m) => builder.magnitude(m).build(),
        None => builder.no_magnitude().build(),
    }
}

/// Criteria over whole seconds.
pub fn criteria(min: f64, max: f64, start_secs: i64, end_secs: i64) -> FilterCriteria {
    FilterCriteria::new(min, max, at(start_secs), at(end_secs))
}

/// `n` events alternating through magnitudes 0.0..9.9 and spaced one minute apart.
pub fn build_rowset(n: usize) -> RowSet {
    (0..n)
        .map(|i| {
            let magnitude = if i % 13 == 0 { None } else { Some((i % 100) as f64 / 10.0) };
            quake(magnitude, i as i64 * 60)
        })
        .collect()
}
