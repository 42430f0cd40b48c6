//! seismo-core — SeismoScope core library.
//!
//! This crate holds everything downstream of the feed: the shared types, the
//! filter engine, and the consumers that turn a filtered row set into
//! something a user can read or download.
//!
//! # Architecture
//!
//! ```text
//! Feed loader ──► RowSet ──► filter ──► sort ──► table
//!                              │
//!                              ├──► export (csv, jsonl)
//!                              └──► analysis (histogram, regression)
//! ```
//!
//! The feed loader lives in `seismo-feed`; nothing here performs I/O except
//! [`config::Config::load`] and the writers handed to [`export::export`].

pub mod analysis;
pub mod config;
pub mod export;
pub mod filter;
pub mod types;

pub use filter::{filter, sort_rows};
pub use types::{Event, FilterCriteria, RowSet, SortOrder};
