// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;
use crate::engine::LeagueSpec;
use crate::specs::{nba, nfl};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeagueKind {
    #[default]
    Nfl,
    Nba,
}

impl LeagueKind {
    pub fn key(self) -> &'static str {
        self.spec().key
    }

    pub fn spec(self) -> &'static LeagueSpec {
        match self {
            LeagueKind::Nfl => nfl::spec(),
            LeagueKind::Nba => nba::spec(),
        }
    }

    pub fn default_url(self) -> String {
        join!(BASE_URL, self.spec().path)
    }
}

impl FromStr for LeagueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nfl" => Ok(LeagueKind::Nfl),
            "nba" => Ok(LeagueKind::Nba),
            other => Err(format!("unknown league '{other}' (expected nfl or nba)")),
        }
    }
}

impl fmt::Display for LeagueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Where the standings document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    /// A saved copy of the page, for offline runs and fixtures.
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub league: LeagueKind,
    pub source: Source,
    pub timeout: Duration,
}

impl ScrapeOptions {
    pub fn for_league(league: LeagueKind) -> Self {
        Self {
            league,
            source: Source::Remote(league.default_url()),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
        }
    }
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self::for_league(LeagueKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls() {
        assert_eq!(LeagueKind::Nfl.default_url(), "https://plaintextsports.com/nfl/2025/standings");
        assert_eq!(LeagueKind::Nba.default_url(), "https://plaintextsports.com/nba/2025-2026/standings");
    }

    #[test]
    fn parse_league_names() {
        assert_eq!("NBA".parse::<LeagueKind>(), Ok(LeagueKind::Nba));
        assert_eq!(" nfl ".parse::<LeagueKind>(), Ok(LeagueKind::Nfl));
        assert!("mlb".parse::<LeagueKind>().is_err());
        assert_eq!(LeagueKind::Nba.to_string(), "nba");
    }

    #[test]
    fn defaults() {
        let o = ScrapeOptions::default();
        assert_eq!(o.league, LeagueKind::Nfl);
        assert_eq!(o.timeout, Duration::from_secs(10));
        assert_eq!(o.source, Source::Remote(LeagueKind::Nfl.default_url()));
    }
}
