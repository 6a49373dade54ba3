// src/engine/line.rs
//! Line classifier: what shape a trimmed fragment has.
//!
//! Classification is purely syntactic. Whether a row is *used* depends on
//! the tracker's context, which is the engine's business. A fragment may
//! satisfy several row shapes at once (e.g. a seeded row that also carries a
//! `W-L` split column), so all of them are kept and each view reads its own.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::types::RowShape;

fn standing_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Z]{2,3})(?:-([a-z]))?\s+(\d+)\s+(\d+)(?:\s+(\d+))?")
            .expect("Invalid standing regex")
    })
}

fn seeded_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d+):([A-Z]{2,3})(?:-([a-z]))?\s+(\d+)\s+(\d+)(?:\s+(\d+))?")
            .expect("Invalid seeded regex")
    })
}

fn group_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+):\[?([A-Z]{2,3})\]?.*?(\d+)-(\d+)").expect("Invalid group regex")
    })
}

/// The captured pieces of one team row. Counts are digit-only captures, so
/// they are never negative; a run too long for `u32` is not a row at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields<'a> {
    /// `N:` prefix: playoff seed, or rank inside a cup group.
    pub rank: Option<u32>,
    pub abbr: &'a str,
    /// One-letter marker after a dash (`KC-x`, `KC-e`).
    pub suffix: Option<char>,
    pub wins: u32,
    pub losses: u32,
    /// Third count when present. Not every league has one.
    pub ties: Option<u32>,
}

impl Fields<'_> {
    pub fn is_eliminated(&self) -> bool {
        self.suffix == Some('e')
    }
}

fn num(caps: &Captures, i: usize) -> Option<Option<u32>> {
    match caps.get(i) {
        Some(m) => m.as_str().parse().ok().map(Some),
        None => Some(None),
    }
}

fn suffix(caps: &Captures, i: usize) -> Option<char> {
    caps.get(i).and_then(|m| m.as_str().chars().next())
}

fn read_standing(text: &str) -> Option<Fields<'_>> {
    let c = standing_re().captures(text)?;
    Some(Fields {
        rank: None,
        abbr: c.get(1)?.as_str(),
        suffix: suffix(&c, 2),
        wins: num(&c, 3)??,
        losses: num(&c, 4)??,
        ties: num(&c, 5)?,
    })
}

fn read_seeded(text: &str) -> Option<Fields<'_>> {
    let c = seeded_re().captures(text)?;
    Some(Fields {
        rank: num(&c, 1)?,
        abbr: c.get(2)?.as_str(),
        suffix: suffix(&c, 3),
        wins: num(&c, 4)??,
        losses: num(&c, 5)??,
        ties: num(&c, 6)?,
    })
}

fn read_group(text: &str) -> Option<Fields<'_>> {
    let c = group_re().captures(text)?;
    Some(Fields {
        rank: num(&c, 1)?,
        abbr: c.get(2)?.as_str(),
        suffix: None,
        wins: num(&c, 3)??,
        losses: num(&c, 4)??,
        ties: None,
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shapes<'a> {
    pub standing: Option<Fields<'a>>,
    pub seeded: Option<Fields<'a>>,
    pub group: Option<Fields<'a>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// Headers, markers, prose: anything that is not a team row.
    Text(&'a str),
    Rows(Shapes<'a>),
}

impl<'a> Line<'a> {
    /// `text` is expected to be trimmed already.
    pub fn classify(text: &'a str) -> Line<'a> {
        if text.is_empty() {
            return Line::Blank;
        }
        let shapes = Shapes {
            standing: read_standing(text),
            seeded: read_seeded(text),
            group: read_group(text),
        };
        if shapes.standing.is_none() && shapes.seeded.is_none() && shapes.group.is_none() {
            Line::Text(text)
        } else {
            Line::Rows(shapes)
        }
    }

    pub fn row(&self, shape: RowShape) -> Option<&Fields<'a>> {
        match (self, shape) {
            (Line::Rows(s), RowShape::Standing) => s.standing.as_ref(),
            (Line::Rows(s), RowShape::Group) => s.group.as_ref(),
            _ => None,
        }
    }

    pub fn seeded(&self) -> Option<&Fields<'a>> {
        match self {
            Line::Rows(s) => s.seeded.as_ref(),
            _ => None,
        }
    }

    /// An unseeded `ABBR-e` row.
    pub fn eliminated(&self) -> Option<&Fields<'a>> {
        match self {
            Line::Rows(s) => s.standing.as_ref().filter(|f| f.is_eliminated()),
            _ => None,
        }
    }
}
