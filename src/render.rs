//! Plain-text renderers for headless output.

use chrono::SecondsFormat;
use seismo_core::analysis::{HistogramBin, LinearFit};
use seismo_core::{FilterCriteria, RowSet};
use std::io::{self, Write};

/// Placeholder for absent values.
const MISSING: &str = "-";

const HISTOGRAM_WIDTH: usize = 40;

/// Table of `rows` in their given order, truncated to `limit` rows.
pub fn write_table<W: Write>(out: &mut W, rows: &RowSet, limit: Option<usize>) -> io::Result<()> {
    writeln!(
        out,
        "{:<24} {:>5} {:>8} {:>9} {:>10}  {}",
        "time", "mag", "depth", "latitude", "longitude", "place"
    )?;

    for event in rows.iter().take(limit.unwrap_or(usize::MAX)) {
        writeln!(
            out,
            "{:<24} {:>5} {:>8} {:>9.4} {:>10.4}  {}",
            event.occurred_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            fmt_opt(event.magnitude, 1),
            fmt_opt(event.depth_km, 2),
            event.latitude,
            event.longitude,
            event.place.as_deref().filter(|p| !p.is_empty()).unwrap_or(MISSING),
        )?;
    }
    Ok(())
}

/// One-line summary of what the current criteria selected.
pub fn write_summary<W: Write>(
    out: &mut W,
    shown: usize,
    criteria: &FilterCriteria,
) -> io::Result<()> {
    writeln!(
        out,
        "Showing {} earthquakes with magnitude between {:.1} and {:.1} ({} to {})",
        shown,
        criteria.min_magnitude(),
        criteria.max_magnitude(),
        criteria.start_time().to_rfc3339_opts(SecondsFormat::Secs, true),
        criteria.end_time().to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

/// Magnitude histogram as horizontal bars, then the depth regression line.
pub fn write_stats<W: Write>(
    out: &mut W,
    bins: &[HistogramBin],
    fit: Option<LinearFit>,
) -> io::Result<()> {
    writeln!(out, "Magnitude distribution")?;
    if bins.is_empty() {
        writeln!(out, "  (no magnitudes)")?;
    }

    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bin in bins {
        let bar = "#".repeat(bin.count * HISTOGRAM_WIDTH / peak);
        writeln!(
            out,
            "  {:>5.2} .. {:>5.2} | {:<width$} {}",
            bin.lower,
            bin.upper,
            bar,
            bin.count,
            width = HISTOGRAM_WIDTH
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Magnitude vs. depth")?;
    match fit {
        Some(fit) => writeln!(
            out,
            "  depth_km = {:.3} * mag {} {:.3}  (n = {})",
            fit.slope,
            if fit.intercept < 0.0 { "-" } else { "+" },
            fit.intercept.abs(),
            fit.points
        ),
        None => writeln!(out, "  (not enough data for a fit)"),
    }
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => MISSING.to_string(),
    }
}
