// src/engine/types.rs
use std::sync::LazyLock;

use super::names::NameTable;

/* Fragment matching */

/// How a header/boundary fragment is recognized. Applied to trimmed text.
pub enum Marker {
    Exact(&'static str),
    Prefix(&'static str),
    Contains(&'static str),
    Blank,
    All(&'static [Marker]),
}

impl Marker {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Marker::Exact(s) => text == *s,
            Marker::Prefix(s) => text.starts_with(*s),
            Marker::Contains(s) => text.contains(*s),
            Marker::Blank => text.is_empty(),
            Marker::All(list) => list.iter().all(|m| m.matches(text)),
        }
    }
}

/// First rule whose marker matches, if any.
pub fn first_rule<'r, T>(rules: &'r [(Marker, T)], text: &str) -> Option<&'r T> {
    rules.iter().find(|(m, _)| m.matches(text)).map(|(_, r)| r)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    WithTies,
    WithoutTies,
}

/// Which record shape a view reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowShape {
    /// `ABBR[-x] W L [T]`
    Standing,
    /// `N:[ABBR]… W-L` (cup group tables)
    Group,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    DivisionLeaders,
    WildCard,
    Eliminated,
}

/* Views */

pub enum DivisionRule {
    Enter { conference: &'static str, group: &'static str },
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DedupScope {
    Division,
    Conference,
}

pub struct GroupLabel {
    pub conference: &'static str,
    pub group: &'static str,
    pub division: &'static str,
}

pub struct DivisionView {
    pub rules: &'static [(Marker, DivisionRule)],
    pub rows: RowShape,
    pub dedup: DedupScope,
    pub capacity: Option<usize>,
    /// Empty means groups already are division names.
    pub labels: &'static [GroupLabel],
}

impl DivisionView {
    pub fn label(&self, conference: &str, group: &'static str) -> &'static str {
        self.labels
            .iter()
            .find(|l| l.conference == conference && l.group == group)
            .map(|l| l.division)
            .unwrap_or(group)
    }
}

pub enum ConferenceRule {
    /// Set the conference and start reading rows.
    Enter(&'static str),
    /// Set the conference but stop reading rows.
    Switch(&'static str),
    Leave,
}

pub struct ConferenceView {
    pub rules: &'static [(Marker, ConferenceRule)],
    pub rows: RowShape,
    pub capacity: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Enter,
    Leave,
}

pub enum LeagueView {
    /// A dedicated all-teams section on the page.
    Section {
        rules: &'static [(Marker, Toggle)],
        rows: RowShape,
    },
    /// No such section: flatten the conference view.
    FromConferences,
}

pub enum PlayoffSplit {
    /// Section headers decide where seeded rows go.
    Markers(&'static [(Marker, Section)]),
    /// Seeds up to `leaders_through` lead, the rest are wild card.
    Seed { leaders_through: u32 },
}

pub struct PlayoffView {
    /// Sets the conference without consuming the fragment.
    pub conferences: &'static [(Marker, &'static str)],
    pub split: PlayoffSplit,
}

/* League */

pub struct ConferenceLayout {
    pub key: &'static str,
    pub divisions: &'static [&'static str],
}

pub struct LeagueSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    pub arity: Arity,
    pub names: &'static LazyLock<NameTable>,
    /// Output order: first conference's teams lead the derived league list.
    pub conferences: &'static [ConferenceLayout],
    pub division: DivisionView,
    pub conference: ConferenceView,
    pub league: LeagueView,
    pub playoffs: PlayoffView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_kinds() {
        assert!(Marker::Exact("NFL:").matches("NFL:"));
        assert!(!Marker::Exact("NFL:").matches("NFL: standings"));
        assert!(Marker::Prefix("East A:").matches("East A: (4 teams)"));
        assert!(Marker::Contains("Wild Card:").matches("AFC Wild Card:"));
        assert!(Marker::Blank.matches(""));
        assert!(!Marker::Blank.matches("x"));

        static LABEL: &[Marker] = &[Marker::Prefix("East"), Marker::Contains(":")];
        assert!(Marker::All(LABEL).matches("East B:"));
        assert!(!Marker::All(LABEL).matches("Eastern time"));
    }

    #[test]
    fn first_rule_respects_order() {
        static RULES: &[(Marker, u8)] = &[
            (Marker::Contains("Knockout"), 1),
            (Marker::Prefix("East"), 2),
        ];
        assert_eq!(first_rule(RULES, "Eastern Conference Knockout Round:"), Some(&1));
        assert_eq!(first_rule(RULES, "East A:"), Some(&2));
        assert_eq!(first_rule(RULES, "West A:"), None);
    }
}
