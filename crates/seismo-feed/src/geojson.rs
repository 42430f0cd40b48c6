//! Normalizer — turns a GeoJSON feed payload into a [`RowSet`].
//!
//! The payload must be a feature collection; anything else fails the whole
//! load. Features are then normalised one at a time, and a feature that
//! cannot be read is skipped rather than failing the feed. Unknown fields
//! are ignored at every level.

use crate::error::RecordError;
use seismo_core::types::{occurred_at_from_millis, Event, RowSet};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    properties: Option<RawProperties>,
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    place: Option<String>,
    mag: Option<f64>,
    time: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    coordinates: Vec<Option<f64>>,
}

/// Result of normalising one payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub rows: RowSet,
    /// Features dropped as malformed.
    pub skipped: usize,
}

/// Parse a whole feed payload.
///
/// Errors only when the top level is not a feature collection.
pub fn parse_feed(bytes: &[u8]) -> Result<Normalized, serde_json::Error> {
    let collection: FeatureCollection = serde_json::from_slice(bytes)?;
    let total = collection.features.len();

    let mut skipped = 0;
    let rows: RowSet = collection
        .features
        .into_iter()
        .enumerate()
        .filter_map(|(index, feature)| match normalize_feature(feature) {
            Ok(event) => Some(event),
            Err(error) => {
                tracing::debug!(index, %error, "skipping malformed feature");
                skipped += 1;
                None
            }
        })
        .collect();

    tracing::debug!(total, kept = rows.len(), skipped, "feed normalised");
    Ok(Normalized { rows, skipped })
}

/// Normalise a single feature.
///
/// Place, magnitude and depth are copied as given, `null` staying `None`.
/// Longitude, latitude and a valid time are required.
pub fn normalize_feature(feature: serde_json::Value) -> Result<Event, RecordError> {
    let raw: RawFeature = serde_json::from_value(feature)?;
    let properties = raw.properties.unwrap_or_default();
    let geometry = raw.geometry.ok_or(RecordError::MissingGeometry)?;

    let [longitude, latitude, depth_km] = match geometry.coordinates.as_slice() {
        [lon, lat, depth, ..] => [*lon, *lat, *depth],
        short => return Err(RecordError::ShortCoordinates(short.len())),
    };

    let millis = properties.time.ok_or(RecordError::MissingTime)?;
    let occurred_at = occurred_at_from_millis(millis).ok_or(RecordError::TimeOutOfRange(millis))?;

    Ok(Event {
        place: properties.place,
        magnitude: properties.mag,
        occurred_at,
        longitude: longitude.ok_or(RecordError::MissingCoordinate("longitude"))?,
        latitude: latitude.ok_or(RecordError::MissingCoordinate("latitude"))?,
        depth_km,
    })
}
