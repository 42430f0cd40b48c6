//! Command-line surface.
//!
//! Every subcommand shares the same filter flags; anything left unset falls
//! back to the configured defaults (24 h window ending at the newest event,
//! magnitude 2.5 to 10.0).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use seismo_core::analysis::{DEFAULT_HISTOGRAM_BINS, MAX_HISTOGRAM_BINS};
use seismo_core::config::{FilterConfig, REFRESH_INTERVAL_MINUTES};
use seismo_core::export::ExportFormat;
use seismo_core::{FilterCriteria, RowSet, SortOrder};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seismoscope",
    version,
    about = "SeismoScope — the global earthquake feed, filtered"
)]
pub struct Cli {
    /// Write debug logs to /tmp/seismoscope-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print matching events as a table (the default).
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, value_enum, default_value_t = SortArg::Latest)]
        sort: SortArg,
        /// Print at most this many rows.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Write matching events as CSV or JSON Lines.
    Export {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, value_enum, default_value_t = SortArg::Latest)]
        sort: SortArg,
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,
        /// Destination file; stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the magnitude distribution and the depth/magnitude fit.
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
        /// Histogram bin count (1-200).
        #[arg(
            long,
            default_value_t = DEFAULT_HISTOGRAM_BINS,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_HISTOGRAM_BINS as u64)
        )]
        bins: usize,
    },
    /// Keep running, reloading the feed in the background.
    Watch {
        #[command(flatten)]
        filter: FilterArgs,
        /// Minutes between reloads (1–30). Defaults to the configured value.
        #[arg(long, value_parser = clap::value_parser!(u64).range(REFRESH_INTERVAL_MINUTES))]
        interval_minutes: Option<u64>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List {
            filter: FilterArgs::default(),
            sort: SortArg::Latest,
            limit: None,
        }
    }
}

/// Filter flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Minimum magnitude (inclusive).
    #[arg(long, allow_negative_numbers = true)]
    pub min_mag: Option<f64>,
    /// Maximum magnitude (inclusive).
    #[arg(long, allow_negative_numbers = true)]
    pub max_mag: Option<f64>,
    /// Window start, UTC (RFC 3339 or `YYYY-MM-DD[ HH:MM[:SS]]`).
    #[arg(long, value_parser = parse_utc)]
    pub start: Option<DateTime<Utc>>,
    /// Window end, UTC (inclusive).
    #[arg(long, value_parser = parse_utc)]
    pub end: Option<DateTime<Utc>>,
}

impl FilterArgs {
    /// Resolve the flags against the configured defaults for `rows`.
    ///
    /// `None` only when `rows` is empty and the window is not fully given.
    pub fn criteria(&self, rows: &RowSet, config: &FilterConfig) -> Option<FilterCriteria> {
        let base = match (self.start, self.end) {
            (Some(start), Some(end)) => {
                FilterCriteria::new(config.min_magnitude, config.max_magnitude, start, end)
            }
            _ => FilterCriteria::defaults_for(rows, config)?,
        };

        let criteria = base
            .with_magnitude(
                self.min_mag.unwrap_or(base.min_magnitude()),
                self.max_mag.unwrap_or(base.max_magnitude()),
            )
            .with_window(
                self.start.unwrap_or(base.start_time()),
                self.end.unwrap_or(base.end_time()),
            );
        Some(criteria)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Latest,
    Oldest,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Latest => SortOrder::LatestFirst,
            SortArg::Oldest => SortOrder::OldestFirst,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Jsonl,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Jsonl => ExportFormat::Jsonl,
        }
    }
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a UTC timestamp flag. Naive values are taken as UTC; a bare date
/// means midnight.
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            format!("invalid UTC time {s:?}; expected RFC 3339 or YYYY-MM-DD HH:MM[:SS]")
        })
}
