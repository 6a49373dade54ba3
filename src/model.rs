// src/model.rs
//! Output shapes. Field names are what the existing front-ends read, so the
//! serde names here are a compatibility contract.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;

/// One team's line as read from the page.
///
/// Two records describe the same team when their `abbreviation`s match; the
/// counts are not part of that identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    pub name: String,
    #[serde(rename = "abbr")]
    pub abbreviation: String,
    pub wins: u32,
    pub losses: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ties: Option<u32>,
}

impl TeamRecord {
    /// Three `u32` counts can sum past `u32::MAX`.
    pub fn games(&self) -> u64 {
        self.wins as u64 + self.losses as u64 + self.ties.unwrap_or(0) as u64
    }

    /// Ties count as half a win. No games played reads as 0.0.
    pub fn win_pct(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties.unwrap_or(0) as f64 * 0.5) / games as f64
    }

    /// `W-L` or `W-L-T`.
    pub fn record(&self) -> String {
        match self.ties {
            Some(t) => format!("{}-{}-{}", self.wins, self.losses, t),
            None => format!("{}-{}", self.wins, self.losses),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlayoffPicture {
    pub division_leaders: Vec<TeamRecord>,
    pub wild_card: Vec<TeamRecord>,
    pub eliminated: Vec<TeamRecord>,
}

impl PlayoffPicture {
    pub fn len(&self) -> usize {
        self.division_leaders.len() + self.wild_card.len() + self.eliminated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The four views of one league's standings, built fresh per run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StandingsModel {
    /// conference → division → teams
    pub division: BTreeMap<String, BTreeMap<String, Vec<TeamRecord>>>,
    pub conference: BTreeMap<String, Vec<TeamRecord>>,
    pub league: Vec<TeamRecord>,
    pub playoffs: BTreeMap<String, PlayoffPicture>,
}

impl StandingsModel {
    /// Records across every view (a team counts once per view it appears in).
    pub fn team_count(&self) -> usize {
        let division: usize = self.division.values().flat_map(|d| d.values()).map(Vec::len).sum();
        let conference: usize = self.conference.values().map(Vec::len).sum();
        let playoffs: usize = self.playoffs.values().map(PlayoffPicture::len).sum();
        division + conference + self.league.len() + playoffs
    }

    /// A successful parse that matched nothing. Keys may still be present.
    pub fn is_empty(&self) -> bool {
        self.team_count() == 0
    }

    /// Plain-text report: league size, then per conference the team count and
    /// the `top` best records as `ABBR W-L[-T]`.
    pub fn summary(&self, top: usize) -> String {
        let mut out = format!("League: {} teams\n", self.league.len());
        for (conference, teams) in &self.conference {
            out.push_str(&format!("{conference}: {} teams\n", teams.len()));
            for team in rank_by_record(teams).into_iter().take(top) {
                out.push_str(&format!("  {:<4} {}\n", team.abbreviation, team.record()));
            }
        }
        out
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// `{"error": "<message>"}`, the body a serving layer sends when a run fails.
pub fn error_body(err: &impl Display) -> serde_json::Value {
    serde_json::json!({ "error": err.to_string() })
}

/// Best record first: win percentage, then raw wins. Stable for full ties.
pub fn rank_by_record(teams: &[TeamRecord]) -> Vec<&TeamRecord> {
    let mut out: Vec<&TeamRecord> = teams.iter().collect();
    out.sort_by(|a, b| {
        b.win_pct()
            .total_cmp(&a.win_pct())
            .then_with(|| b.wins.cmp(&a.wins))
    });
    out
}
