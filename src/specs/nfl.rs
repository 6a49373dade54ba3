// src/specs/nfl.rs
//! NFL standings page: two conferences of four divisions, records carry ties.
//!
//! Page layout, top to bottom:
//! - `AFC East:` … `NFC West:` division tables (`BUF  9  3  0 …`)
//! - `American Football Conference:` / `National Football Conference:` lists
//! - `NFL:` the whole league in one list
//! - playoff picture per conference: `Division Leaders:`, `Wild Card:`, then a
//!   `=====` rule above the rest; seeded rows read `1:KC 10 2 0`, eliminated
//!   teams carry `-e`.

use std::sync::LazyLock;

use crate::config::consts::{NFL_CONFERENCE_SIZE, NFL_DIVISION_SIZE, NFL_PATH};
use crate::engine::names::NameTable;
use crate::engine::types::*;

const TEAMS: &[(&str, &str)] = &[
    ("NE", "New England Patriots"), ("BUF", "Buffalo Bills"), ("MIA", "Miami Dolphins"), ("NYJ", "New York Jets"),
    ("BAL", "Baltimore Ravens"), ("PIT", "Pittsburgh Steelers"), ("CIN", "Cincinnati Bengals"), ("CLE", "Cleveland Browns"),
    ("IND", "Indianapolis Colts"), ("JAX", "Jacksonville Jaguars"), ("HOU", "Houston Texans"), ("TEN", "Tennessee Titans"),
    ("DEN", "Denver Broncos"), ("LAC", "Los Angeles Chargers"), ("KC", "Kansas City Chiefs"), ("LV", "Las Vegas Raiders"),
    ("PHI", "Philadelphia Eagles"), ("DAL", "Dallas Cowboys"), ("WAS", "Washington Commanders"), ("NYG", "New York Giants"),
    ("CHI", "Chicago Bears"), ("GB", "Green Bay Packers"), ("DET", "Detroit Lions"), ("MIN", "Minnesota Vikings"),
    ("TB", "Tampa Bay Buccaneers"), ("CAR", "Carolina Panthers"), ("ATL", "Atlanta Falcons"), ("NO", "New Orleans Saints"),
    ("LAR", "Los Angeles Rams"), ("SEA", "Seattle Seahawks"), ("SF", "San Francisco 49ers"), ("ARI", "Arizona Cardinals"),
    // alternates seen on other feeds
    ("JAC", "Jacksonville Jaguars"), ("WSH", "Washington Commanders"), ("LA", "Los Angeles Rams"),
];

static NAMES: LazyLock<NameTable> = LazyLock::new(|| NameTable::from_pairs(TEAMS));

const DIVISIONS: &[&str] = &["East", "North", "South", "West"];

static SPEC: LeagueSpec = LeagueSpec {
    key: "nfl",
    title: "NFL",
    path: NFL_PATH,
    arity: Arity::WithTies,
    names: &NAMES,
    conferences: &[
        ConferenceLayout { key: "AFC", divisions: DIVISIONS },
        ConferenceLayout { key: "NFC", divisions: DIVISIONS },
    ],
    division: DivisionView {
        rules: &[
            (Marker::Contains("AFC East:"), DivisionRule::Enter { conference: "AFC", group: "East" }),
            (Marker::Contains("AFC North:"), DivisionRule::Enter { conference: "AFC", group: "North" }),
            (Marker::Contains("AFC South:"), DivisionRule::Enter { conference: "AFC", group: "South" }),
            (Marker::Contains("AFC West:"), DivisionRule::Enter { conference: "AFC", group: "West" }),
            (Marker::Contains("NFC East:"), DivisionRule::Enter { conference: "NFC", group: "East" }),
            (Marker::Contains("NFC North:"), DivisionRule::Enter { conference: "NFC", group: "North" }),
            (Marker::Contains("NFC South:"), DivisionRule::Enter { conference: "NFC", group: "South" }),
            (Marker::Contains("NFC West:"), DivisionRule::Enter { conference: "NFC", group: "West" }),
        ],
        rows: RowShape::Standing,
        dedup: DedupScope::Division,
        capacity: Some(NFL_DIVISION_SIZE),
        labels: &[],
    },
    conference: ConferenceView {
        rules: &[
            (Marker::Contains("American Football Conference:"), ConferenceRule::Enter("AFC")),
            (Marker::Contains("National Football Conference:"), ConferenceRule::Enter("NFC")),
            (Marker::Contains("NFL:"), ConferenceRule::Leave),
            (Marker::Contains("Division Leaders:"), ConferenceRule::Leave),
        ],
        rows: RowShape::Standing,
        capacity: NFL_CONFERENCE_SIZE,
    },
    league: LeagueView::Section {
        rules: &[
            (Marker::Exact("NFL:"), Toggle::Enter),
            (Marker::Contains("Division Leaders:"), Toggle::Leave),
            (Marker::Contains("American Football Conference"), Toggle::Leave),
        ],
        rows: RowShape::Standing,
    },
    playoffs: PlayoffView {
        conferences: &[
            (Marker::Contains("American Football Conference"), "AFC"),
            (Marker::Contains("National Football Conference"), "NFC"),
        ],
        split: PlayoffSplit::Markers(&[
            (Marker::Contains("Division Leaders:"), Section::DivisionLeaders),
            (Marker::Contains("Wild Card:"), Section::WildCard),
            (Marker::Contains("============"), Section::Eliminated),
        ]),
    },
};

pub fn spec() -> &'static LeagueSpec {
    &SPEC
}
