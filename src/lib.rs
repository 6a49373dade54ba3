// src/lib.rs
//! Standings scraper for plaintextsports.com.
//!
//! One pass over a page's text fragments yields four views of a league:
//! division tables, conference lists, the whole league and the playoff
//! picture. See [`engine::parse`] for already-fetched fragments and
//! [`collect_standings`] for the fetch-and-parse path.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod model;
pub mod progress;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::FetchError;
pub use model::{PlayoffPicture, StandingsModel, TeamRecord};
pub use scrape::collect_standings;
