//! Configuration types for seismoscope.
//!
//! [`Config::load`] reads `~/.config/seismoscope/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! Values are read once at startup and are not changed while running.

use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

/// USGS summary feed: every recorded event of the trailing month.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";

const DEFAULT_CONFIG: &str = r#"
[feed]
url            = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson"
timeout_secs   = 10
cache_ttl_secs = 300

[filter]
lookback_hours = 24
min_magnitude  = 2.5
max_magnitude  = 10.0

[refresh]
interval_minutes = 5
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/seismoscope/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

/// `[feed]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_feed_url() -> String { DEFAULT_FEED_URL.to_string() }
fn default_timeout_secs() -> u64 { 10 }
fn default_cache_ttl_secs() -> u64 { 300 }

impl FeedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

/// `[filter]` section of `config.toml` — the criteria the tool opens with.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_lookback_hours")]
    pub lookback_hours: i64,
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: f64,
    #[serde(default = "default_max_magnitude")]
    pub max_magnitude: f64,
}

fn default_lookback_hours() -> i64 { 24 }
fn default_min_magnitude() -> f64 { 2.5 }
fn default_max_magnitude() -> f64 { 10.0 }

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            lookback_hours: default_lookback_hours(),
            min_magnitude: default_min_magnitude(),
            max_magnitude: default_max_magnitude(),
        }
    }
}

/// `[refresh]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
}

fn default_interval_minutes() -> u64 { 5 }

/// Allowed refresh interval, in minutes.
pub const REFRESH_INTERVAL_MINUTES: RangeInclusive<u64> = 1..=30;

impl RefreshConfig {
    /// The configured interval, clamped to [`REFRESH_INTERVAL_MINUTES`].
    pub fn interval(&self) -> Duration {
        let minutes = self.interval_minutes.clamp(
            *REFRESH_INTERVAL_MINUTES.start(),
            *REFRESH_INTERVAL_MINUTES.end(),
        );
        Duration::from_secs(minutes * 60)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_minutes: default_interval_minutes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/seismoscope/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Location of the user config file, honouring `XDG_CONFIG_HOME`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("seismoscope")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
