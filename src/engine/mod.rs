// src/engine/mod.rs
//! Generic standings parser. Everything league-specific arrives through a
//! `LeagueSpec` (see `specs`); nothing in here names a team or a header.

pub mod accumulate;
pub mod extract;
pub mod line;
pub mod names;
pub mod tracker;
pub mod types;
mod engine;

pub use engine::parse;
pub use types::LeagueSpec;
