//! seismoscope — the global earthquake feed, filtered.
//!
//! Headless front end over the two library crates. This crate exposes the
//! CLI definition, the renderers and the command runner as public modules so
//! that integration tests can drive them directly.
//!
//! # Architecture
//!
//! ```text
//! FeedLoader ──► filter ──► sort ──► table / export / stats
//!     ▲
//!     └── Refresher (background task, watch mode)
//! ```
//!
//! The feed is fetched at most once per cache TTL; every command filters the
//! same cached row set.

pub mod cli;
pub mod render;
pub mod run;

pub use seismo_core::{Event, FilterCriteria, RowSet, SortOrder};
