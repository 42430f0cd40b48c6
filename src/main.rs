use clap::Parser;
use seismo_core::config::Config;
use seismoscope::cli::Cli;
use std::process::ExitCode;

const DEBUG_LOG: &str = "/tmp/seismoscope-debug.log";

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("seismoscope debug log started; tail -f {DEBUG_LOG}");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
            )
            .init();
    }

    let config = Config::load().unwrap_or_else(|error| {
        tracing::warn!(%error, "config unreadable, using defaults");
        Config::defaults()
    });

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(seismoscope::run::run(cli, config))
}
