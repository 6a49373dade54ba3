// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://plaintextsports.com";
pub const NFL_PATH: &str = "/nfl/2025/standings";
pub const NBA_PATH: &str = "/nba/2025-2026/standings";
pub const FETCH_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = "pts_standings/0.1";

// Page limits
pub const NFL_DIVISION_SIZE: usize = 4;
pub const NFL_CONFERENCE_SIZE: usize = 16;
pub const NBA_CONFERENCE_SIZE: usize = 15;

// NBA: seeds 1..=6 are in outright, the rest are play-in
pub const PLAYOFF_LEADER_SEEDS: u32 = 6;

// Summary output
pub const SUMMARY_TOP: usize = 5;
