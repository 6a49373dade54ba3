// src/specs/mod.rs
//! # League specs
//!
//! One module per standings page. A spec is a static [`LeagueSpec`] value:
//! *which fragments open and close each view*, *which row shape each view
//! reads*, and the league's name table. No code runs here; the engine
//! interprets the tables.
//!
//! ## What lives here
//! - **Header markers** per view (division/group, conference, league,
//!   playoff picture), as ordered `(Marker, rule)` tables. First match wins.
//! - **Capacities** and the **dedup scope** of the division view.
//! - **Labels** for leagues whose page groups don't carry division names.
//! - The **abbreviation → full name** table, alternates included.
//!
//! ## What does **not** live here
//! - Fetching, fragment extraction or output shaping (`core`, `scrape`,
//!   `model`).
//! - Row regexes. Row *shapes* are shared (`engine::line`); a spec only
//!   picks which one each view reads.
//!
//! ## Adding a league
//! Write a `LeagueSpec` for the page, add a `LeagueKind` variant in
//! `config::options`, and test against a saved copy of the page.
//!
//! [`LeagueSpec`]: crate::engine::LeagueSpec
pub mod nba;
pub mod nfl;
