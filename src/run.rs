//! Command dispatch: load the feed once, filter, and hand the rows to the
//! requested consumer.

use crate::cli::{Cli, Command, FilterArgs};
use crate::render;
use anyhow::Context;
use seismo_core::analysis::{depth_regression, magnitude_histogram};
use seismo_core::config::{Config, FilterConfig, RefreshConfig};
use seismo_core::export::{export, ExportFormat};
use seismo_core::{filter, sort_rows, FilterCriteria, RowSet, SortOrder};
use seismo_feed::{FeedLoader, Refresher, Snapshot};
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

/// Exit code used when the feed could not be loaded.
pub const EXIT_FEED_UNAVAILABLE: u8 = 2;

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<ExitCode> {
    let loader = Arc::new(FeedLoader::from_config(&config.feed).context("building feed client")?);
    let snapshot = loader.load().await;
    if let Some(advisory) = snapshot.advisory() {
        eprintln!("{advisory}");
        return Ok(ExitCode::from(EXIT_FEED_UNAVAILABLE));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or_default() {
        Command::List { filter: args, sort, limit } => {
            let Some((rows, criteria)) = select(&snapshot, &args, &config.filter, sort.into())
            else {
                return Ok(ExitCode::SUCCESS);
            };
            render::write_table(&mut out, &rows, limit)?;
            render::write_summary(&mut out, rows.len(), &criteria)?;
        }
        Command::Export { filter: args, sort, format, output } => {
            let rows = select(&snapshot, &args, &config.filter, sort.into())
                .map(|(rows, _)| rows)
                .unwrap_or_default();
            let format = ExportFormat::from(format);
            let written = match output {
                Some(path) => {
                    let mut file = std::fs::File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    let n = export(&rows, format, &mut file)?;
                    file.flush()?;
                    n
                }
                None => export(&rows, format, &mut out)?,
            };
            tracing::info!(rows = written, %format, "export complete");
        }
        Command::Stats { filter: args, bins } => {
            let rows = select(&snapshot, &args, &config.filter, SortOrder::default())
                .map(|(rows, _)| rows)
                .unwrap_or_default();
            let histogram = magnitude_histogram(&rows, bins);
            render::write_stats(&mut out, &histogram, depth_regression(&rows))?;
        }
        Command::Watch { filter: args, interval_minutes } => {
            drop(out);
            let refresh = match interval_minutes {
                Some(interval_minutes) => RefreshConfig { interval_minutes },
                None => config.refresh,
            };
            watch(loader, snapshot, args, config.filter, refresh.interval()).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Filter the snapshot with the resolved criteria, then sort for display.
fn select(
    snapshot: &Snapshot,
    args: &FilterArgs,
    config: &FilterConfig,
    order: SortOrder,
) -> Option<(RowSet, FilterCriteria)> {
    let criteria = args.criteria(&snapshot.rows, config)?;
    let rows = sort_rows(&filter(&snapshot.rows, &criteria), order);
    tracing::debug!(total = snapshot.rows.len(), selected = rows.len(), "rows filtered");
    Some((rows, criteria))
}

/// Print a summary now and after every background reload until Ctrl-C.
async fn watch(
    loader: Arc<FeedLoader>,
    initial: Snapshot,
    args: FilterArgs,
    config: FilterConfig,
    interval: Duration,
) -> anyhow::Result<()> {
    print_watch_line(&initial, &args, &config)?;
    println!("Refreshing every {} minute(s); Ctrl-C to stop.", interval.as_secs() / 60);

    let mut refresher = Refresher::spawn(loader, interval);
    loop {
        tokio::select! {
            update = refresher.next() => {
                let Some(update) = update else { break };
                print_watch_line(&update.snapshot, &args, &config)?;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(())
}

fn print_watch_line(
    snapshot: &Snapshot,
    args: &FilterArgs,
    config: &FilterConfig,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Some(advisory) = snapshot.advisory() {
        writeln!(out, "{advisory}")?;
        return Ok(());
    }
    match select(snapshot, args, config, SortOrder::LatestFirst) {
        Some((rows, criteria)) => render::write_summary(&mut out, rows.len(), &criteria)?,
        None => writeln!(out, "Feed is empty.")?,
    }
    Ok(())
}
