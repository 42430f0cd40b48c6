//! Static feed payloads used across harnesses.
//!
//! All fixture times are offsets from [`FEED_END_MS`], the newest event in
//! [`FEED_MIXED`].

use serde_json::{json, Value};

/// 2024-01-15T10:00:00Z, the newest event in the mixed fixture.
pub const FEED_END_MS: i64 = 1_705_312_800_000;

pub const MINUTE_MS: i64 = 60 * 1000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;

/// Features in [`FEED_MIXED`], including the malformed one.
pub const FEED_MIXED_FEATURES: usize = 7;

/// Places that survive the default criteria (24 h window, magnitude 2.5..=10),
/// newest first.
pub const DEFAULT_SELECTION_LATEST_FIRST: &[&str] =
    &["Offshore Honshu, Japan", "Ridgecrest, CA", "Tonga Islands"];

fn feature(place: &str, mag: Value, time: i64, coords: Value) -> Value {
    json!({
        "type": "Feature",
        "properties": {
            "place": place,
            "mag": mag,
            "time": time,
            "updated": time + 60_000,
            "status": "reviewed",
            "magType": "ml"
        },
        "geometry": { "type": "Point", "coordinates": coords },
        "id": format!("fx{time}")
    })
}

/// A realistic feed: seven features in non-chronological order, one with a
/// null magnitude, one with a short geometry, one outside the 24 h window.
pub fn feed_mixed() -> Value {
    let end = FEED_END_MS;
    let features = vec![
        feature("Ridgecrest, CA", json!(2.7), end - HOUR_MS, json!([-117.6, 35.7, 8.1])),
        feature("Offshore Honshu, Japan", json!(5.4), end, json!([142.4, 38.1, 35.0])),
        feature("Anza, CA", json!(1.1), end - 2 * HOUR_MS, json!([-116.6, 33.5, 12.0])),
        feature("Volcano, HI", json!(null), end - 30 * MINUTE_MS, json!([-155.3, 19.4, null])),
        feature("Short geometry", json!(3.3), end - 10 * MINUTE_MS, json!([1.0, 2.0])),
        feature("Northern Italy", json!(4.0), end - 48 * HOUR_MS, json!([10.0, 45.0, 5.0])),
        feature("Tonga Islands", json!(6.1), end - 5 * HOUR_MS, json!([-174.8, -19.3, -0.5])),
    ];
    json!({
        "type": "FeatureCollection",
        "metadata": { "title": "USGS All Earthquakes, Past Month", "count": FEED_MIXED_FEATURES },
        "features": features
    })
}

pub fn feed_mixed_body() -> String {
    feed_mixed().to_string()
}

/// A valid, empty collection.
pub fn feed_empty_body() -> String {
    json!({ "type": "FeatureCollection", "features": [] }).to_string()
}
