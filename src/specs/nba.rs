// src/specs/nba.rs
//! NBA standings page, in-season cup layout. No ties.
//!
//! - `East A:` … `West C:` cup groups, rows like `1:[TOR](…)  4-0 …`; a blank
//!   line, a `*` footnote or the site footer closes a group
//! - `Eastern Conference Knockout Round:` / `Western …` brackets
//! - playoff picture per conference, seeded `1:BOS  15  3`; seeds 1–6 are in,
//!   7 and below are play-in; eliminated teams carry `-e`
//!
//! There is no league-wide list on this page, so the league view is built
//! from the two conference lists. Cup groups are shown under the
//! traditional division names.

use std::sync::LazyLock;

use crate::config::consts::{NBA_CONFERENCE_SIZE, NBA_PATH, PLAYOFF_LEADER_SEEDS};
use crate::engine::names::NameTable;
use crate::engine::types::*;

const TEAMS: &[(&str, &str)] = &[
    ("ATL", "Atlanta Hawks"), ("BOS", "Boston Celtics"), ("BKN", "Brooklyn Nets"), ("CHA", "Charlotte Hornets"),
    ("CHI", "Chicago Bulls"), ("CLE", "Cleveland Cavaliers"), ("DAL", "Dallas Mavericks"), ("DEN", "Denver Nuggets"),
    ("DET", "Detroit Pistons"), ("GSW", "Golden State Warriors"), ("GS", "Golden State Warriors"),
    ("HOU", "Houston Rockets"), ("IND", "Indiana Pacers"), ("LAC", "Los Angeles Clippers"), ("LAL", "Los Angeles Lakers"),
    ("MEM", "Memphis Grizzlies"), ("MIA", "Miami Heat"), ("MIL", "Milwaukee Bucks"), ("MIN", "Minnesota Timberwolves"),
    ("NOP", "New Orleans Pelicans"), ("NO", "New Orleans Pelicans"), ("NYK", "New York Knicks"), ("NY", "New York Knicks"),
    ("OKC", "Oklahoma City Thunder"), ("ORL", "Orlando Magic"), ("PHI", "Philadelphia 76ers"), ("PHX", "Phoenix Suns"),
    ("POR", "Portland Trail Blazers"), ("SAC", "Sacramento Kings"), ("SAS", "San Antonio Spurs"), ("SA", "San Antonio Spurs"),
    ("TOR", "Toronto Raptors"), ("UTA", "Utah Jazz"), ("WAS", "Washington Wizards"), ("WSH", "Washington Wizards"),
];

static NAMES: LazyLock<NameTable> = LazyLock::new(|| NameTable::from_pairs(TEAMS));

const EAST_LABEL: &[Marker] = &[Marker::Prefix("East"), Marker::Contains(":")];
const WEST_LABEL: &[Marker] = &[Marker::Prefix("West"), Marker::Contains(":")];

static SPEC: LeagueSpec = LeagueSpec {
    key: "nba",
    title: "NBA",
    path: NBA_PATH,
    arity: Arity::WithoutTies,
    names: &NAMES,
    conferences: &[
        ConferenceLayout { key: "Eastern", divisions: &["Atlantic", "Central", "Southeast"] },
        ConferenceLayout { key: "Western", divisions: &["Northwest", "Pacific", "Southwest"] },
    ],
    division: DivisionView {
        rules: &[
            (Marker::Prefix("East A:"), DivisionRule::Enter { conference: "Eastern", group: "A" }),
            (Marker::Prefix("East B:"), DivisionRule::Enter { conference: "Eastern", group: "B" }),
            (Marker::Prefix("East C:"), DivisionRule::Enter { conference: "Eastern", group: "C" }),
            (Marker::Prefix("West A:"), DivisionRule::Enter { conference: "Western", group: "A" }),
            (Marker::Prefix("West B:"), DivisionRule::Enter { conference: "Western", group: "B" }),
            (Marker::Prefix("West C:"), DivisionRule::Enter { conference: "Western", group: "C" }),
            (Marker::Blank, DivisionRule::Leave),
            (Marker::Prefix("*"), DivisionRule::Leave),
            (Marker::Contains("plaintextsports"), DivisionRule::Leave),
        ],
        rows: RowShape::Group,
        dedup: DedupScope::Conference,
        capacity: None,
        labels: &[
            GroupLabel { conference: "Eastern", group: "A", division: "Atlantic" },
            GroupLabel { conference: "Eastern", group: "B", division: "Central" },
            GroupLabel { conference: "Eastern", group: "C", division: "Southeast" },
            GroupLabel { conference: "Western", group: "A", division: "Northwest" },
            GroupLabel { conference: "Western", group: "B", division: "Pacific" },
            GroupLabel { conference: "Western", group: "C", division: "Southwest" },
        ],
    },
    conference: ConferenceView {
        rules: &[
            (Marker::Contains("Eastern Conference Knockout Round:"), ConferenceRule::Switch("Eastern")),
            (Marker::Contains("Western Conference Knockout Round:"), ConferenceRule::Switch("Western")),
            (Marker::All(EAST_LABEL), ConferenceRule::Enter("Eastern")),
            (Marker::All(WEST_LABEL), ConferenceRule::Enter("Western")),
            (Marker::Prefix("*"), ConferenceRule::Leave),
            (Marker::Contains("plaintextsports"), ConferenceRule::Leave),
        ],
        rows: RowShape::Group,
        capacity: NBA_CONFERENCE_SIZE,
    },
    league: LeagueView::FromConferences,
    playoffs: PlayoffView {
        conferences: &[
            (Marker::Contains("Eastern Conference"), "Eastern"),
            (Marker::Contains("Western Conference"), "Western"),
        ],
        split: PlayoffSplit::Seed { leaders_through: PLAYOFF_LEADER_SEEDS },
    },
};

pub fn spec() -> &'static LeagueSpec {
    &SPEC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_abbreviations_share_a_name() {
        for (a, b) in [("GS", "GSW"), ("NO", "NOP"), ("NY", "NYK"), ("SA", "SAS"), ("WSH", "WAS")] {
            assert_eq!(NAMES.get(a), NAMES.get(b), "{a} vs {b}");
            assert!(NAMES.get(a).is_some());
        }
        let distinct: std::collections::HashSet<&str> = TEAMS.iter().map(|(_, n)| *n).collect();
        assert_eq!(distinct.len(), 30);
    }

    #[test]
    fn groups_relabel_per_conference() {
        let d = &spec().division;
        assert_eq!(d.label("Eastern", "A"), "Atlantic");
        assert_eq!(d.label("Western", "A"), "Northwest");
        assert_eq!(d.label("Western", "C"), "Southwest");
    }
}
