// src/engine/accumulate.rs
//! The four accumulators behind the views.
//!
//! Every one of them follows the same contract: first sighting of an
//! abbreviation in a scope wins, later sightings are dropped quietly, and a
//! bounded scope stops growing once full. Insertion order is encounter order.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::{PlayoffPicture, TeamRecord};

use super::types::{DedupScope, LeagueSpec, Section};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offer {
    Added,
    Duplicate,
    Full,
}

pub trait Accumulator {
    type Scope;

    fn offer(&mut self, scope: Self::Scope, record: TeamRecord) -> Offer;
}

fn admit(seen: &mut HashSet<String>, list: &mut Vec<TeamRecord>, capacity: Option<usize>, record: TeamRecord) -> Offer {
    if seen.contains(&record.abbreviation) {
        return Offer::Duplicate;
    }
    if capacity.is_some_and(|cap| list.len() >= cap) {
        return Offer::Full;
    }
    seen.insert(record.abbreviation.clone());
    list.push(record);
    Offer::Added
}

/* ---------------- division ---------------- */

/// conference → division → teams. Dedup is per division, or per conference
/// when the page lists each team in exactly one group.
pub struct Divisions {
    table: BTreeMap<&'static str, BTreeMap<&'static str, Vec<TeamRecord>>>,
    seen: HashMap<(&'static str, Option<&'static str>), HashSet<String>>,
    dedup: DedupScope,
    capacity: Option<usize>,
}

impl Divisions {
    pub fn new(spec: &LeagueSpec) -> Self {
        let table = spec
            .conferences
            .iter()
            .map(|c| (c.key, c.divisions.iter().map(|d| (*d, Vec::new())).collect()))
            .collect();
        Self {
            table,
            seen: HashMap::new(),
            dedup: spec.division.dedup,
            capacity: spec.division.capacity,
        }
    }

    pub fn into_table(self) -> BTreeMap<&'static str, BTreeMap<&'static str, Vec<TeamRecord>>> {
        self.table
    }
}

impl Accumulator for Divisions {
    /// (conference, division label)
    type Scope = (&'static str, &'static str);

    fn offer(&mut self, (conference, division): Self::Scope, record: TeamRecord) -> Offer {
        let key = match self.dedup {
            DedupScope::Division => (conference, Some(division)),
            DedupScope::Conference => (conference, None),
        };
        let seen = self.seen.entry(key).or_default();
        let list = self.table.entry(conference).or_default().entry(division).or_default();
        admit(seen, list, self.capacity, record)
    }
}

/* ---------------- conference ---------------- */

pub struct Conferences {
    table: BTreeMap<&'static str, Vec<TeamRecord>>,
    seen: HashMap<&'static str, HashSet<String>>,
    capacity: usize,
}

impl Conferences {
    pub fn new(spec: &LeagueSpec) -> Self {
        Self {
            table: spec.conferences.iter().map(|c| (c.key, Vec::new())).collect(),
            seen: HashMap::new(),
            capacity: spec.conference.capacity,
        }
    }

    pub fn get(&self, conference: &str) -> &[TeamRecord] {
        self.table.get(conference).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn into_table(self) -> BTreeMap<&'static str, Vec<TeamRecord>> {
        self.table
    }
}

impl Accumulator for Conferences {
    type Scope = &'static str;

    fn offer(&mut self, conference: Self::Scope, record: TeamRecord) -> Offer {
        let seen = self.seen.entry(conference).or_default();
        let list = self.table.entry(conference).or_default();
        admit(seen, list, Some(self.capacity), record)
    }
}

/* ---------------- league ---------------- */

#[derive(Default)]
pub struct League {
    teams: Vec<TeamRecord>,
    seen: HashSet<String>,
}

impl League {
    pub fn into_teams(self) -> Vec<TeamRecord> {
        self.teams
    }
}

impl Accumulator for League {
    type Scope = ();

    fn offer(&mut self, _: (), record: TeamRecord) -> Offer {
        admit(&mut self.seen, &mut self.teams, None, record)
    }
}

/* ---------------- playoffs ---------------- */

/// One dedup set per conference, shared by its three sub-lists: a team that
/// already holds a seed is not listed again as eliminated.
pub struct Playoffs {
    table: BTreeMap<&'static str, PlayoffPicture>,
    seen: HashMap<&'static str, HashSet<String>>,
}

impl Playoffs {
    pub fn new(spec: &LeagueSpec) -> Self {
        Self {
            table: spec.conferences.iter().map(|c| (c.key, PlayoffPicture::default())).collect(),
            seen: HashMap::new(),
        }
    }

    pub fn into_table(self) -> BTreeMap<&'static str, PlayoffPicture> {
        self.table
    }
}

impl Accumulator for Playoffs {
    type Scope = (&'static str, Section);

    fn offer(&mut self, (conference, section): Self::Scope, record: TeamRecord) -> Offer {
        let seen = self.seen.entry(conference).or_default();
        let picture = self.table.entry(conference).or_default();
        let list = match section {
            Section::DivisionLeaders => &mut picture.division_leaders,
            Section::WildCard => &mut picture.wild_card,
            Section::Eliminated => &mut picture.eliminated,
        };
        admit(seen, list, None, record)
    }
}
