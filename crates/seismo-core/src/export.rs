//! Export — serialises a [`RowSet`] for download.
//!
//! Every format uses the same row projection, in the dashboard's column
//! order: `time, place, mag, depth, latitude, longitude`. Absent values are
//! written as empty CSV cells and as JSON `null`.

use crate::types::{Event, RowSet};
use chrono::SecondsFormat;
use std::io::Write;

/// Column headers, in output order.
pub const COLUMNS: [&str; 6] = ["time", "place", "mag", "depth", "latitude", "longitude"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Jsonl,
}

impl ExportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    /// Suggested file name for a download.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "earthquakes.csv",
            ExportFormat::Jsonl => "earthquakes.jsonl",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write `rows` to `out` in `format`, returning the number of data rows.
pub fn export<W: Write>(
    rows: &RowSet,
    format: ExportFormat,
    out: &mut W,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Csv => write_csv(rows, out),
        ExportFormat::Jsonl => write_jsonl(rows, out),
    }
}

/// Convenience wrapper returning the encoded bytes.
pub fn export_to_vec(rows: &RowSet, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    export(rows, format, &mut buf)?;
    Ok(buf)
}

fn write_csv<W: Write>(rows: &RowSet, out: &mut W) -> Result<usize, ExportError> {
    writeln!(out, "{}", COLUMNS.join(","))?;
    for event in rows {
        let cells = [
            format_time(event),
            csv_quote(event.place.as_deref().unwrap_or("")),
            format_opt(event.magnitude),
            format_opt(event.depth_km),
            event.latitude.to_string(),
            event.longitude.to_string(),
        ];
        writeln!(out, "{}", cells.join(","))?;
    }
    Ok(rows.len())
}

fn write_jsonl<W: Write>(rows: &RowSet, out: &mut W) -> Result<usize, ExportError> {
    for event in rows {
        let line = serde_json::json!({
            "time": format_time(event),
            "place": event.place,
            "mag": event.magnitude,
            "depth": event.depth_km,
            "latitude": event.latitude,
            "longitude": event.longitude,
        });
        serde_json::to_writer(&mut *out, &line)?;
        out.write_all(b"\n")?;
    }
    Ok(rows.len())
}

fn format_time(event: &Event) -> String {
    event.occurred_at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn format_opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Quote a CSV cell when it contains a delimiter, quote, or line break.
fn csv_quote(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
