// src/engine/extract.rs
use crate::model::TeamRecord;

use super::line::{Fields, Line};
use super::names::NameTable;
use super::types::{Arity, RowShape};

/// A record pulled out of one fragment, plus whether the page flagged the
/// team as eliminated (`-e`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extracted {
    pub record: TeamRecord,
    pub eliminated: bool,
}

/// Turn captured fields into a record.
///
/// `WithTies` rows must carry the third count; `WithoutTies` rows drop it.
/// The seed is kept only when `seeded` is set.
pub fn to_record(fields: &Fields, arity: Arity, seeded: bool, names: &NameTable) -> Option<TeamRecord> {
    let ties = match arity {
        Arity::WithTies => Some(fields.ties?),
        Arity::WithoutTies => None,
    };
    Some(TeamRecord {
        seed: if seeded { fields.rank } else { None },
        name: s!(names.resolve(fields.abbr)),
        abbreviation: s!(fields.abbr),
        wins: fields.wins,
        losses: fields.losses,
        ties,
    })
}

/// Read a standalone fragment as a team row. `None` is the normal answer
/// for anything that isn't one.
///
/// Seeded mode reads `N:ABBR W L [T]`; otherwise `ABBR W L [T]` (or the
/// cup-table shape when `rows` is `Group`).
pub fn extract(text: &str, rows: RowShape, arity: Arity, seeded: bool, names: &NameTable) -> Option<Extracted> {
    let line = Line::classify(text.trim());
    let fields = if seeded { line.seeded()? } else { line.row(rows)? };
    Some(Extracted {
        record: to_record(fields, arity, seeded, names)?,
        eliminated: fields.is_eliminated(),
    })
}
