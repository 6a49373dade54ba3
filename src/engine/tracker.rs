// src/engine/tracker.rs
//! Context tracker: which conference / division / playoff section the scan
//! is in, per view.
//!
//! Each view keeps its own slice of state because the page's sections
//! overlap: the same "Division Leaders:" line closes the conference list,
//! closes the league list and opens a playoff section.

use super::types::{
    first_rule, ConferenceRule, DivisionRule, LeagueSpec, LeagueView, PlayoffSplit, Section, Toggle,
};

/// Views whose header rule fired on a fragment. A consumed fragment is not
/// read as a row by that view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Consumed {
    pub division: bool,
    pub conference: bool,
    pub league: bool,
    pub playoffs: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tracker {
    /// (conference, group) from the last division/group header.
    group: Option<(&'static str, &'static str)>,
    in_group: bool,

    conference: Option<&'static str>,
    in_conference: bool,

    in_league: bool,

    playoff_conference: Option<&'static str>,
    section: Option<Section>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one trimmed fragment through every view's header rules.
    pub fn observe(&mut self, spec: &LeagueSpec, text: &str) -> Consumed {
        let mut consumed = Consumed::default();

        match first_rule(spec.division.rules, text) {
            Some(&DivisionRule::Enter { conference, group }) => {
                if self.group != Some((conference, group)) {
                    logd!("{}: division context {} {}", spec.title, conference, group);
                }
                self.group = Some((conference, group));
                self.in_group = true;
                consumed.division = true;
            }
            Some(DivisionRule::Leave) => {
                self.in_group = false;
                consumed.division = true;
            }
            None => {}
        }

        match first_rule(spec.conference.rules, text) {
            Some(&ConferenceRule::Enter(conference)) => {
                self.conference = Some(conference);
                self.in_conference = true;
                consumed.conference = true;
            }
            Some(&ConferenceRule::Switch(conference)) => {
                self.conference = Some(conference);
                self.in_conference = false;
                consumed.conference = true;
            }
            Some(ConferenceRule::Leave) => {
                self.conference = None;
                self.in_conference = false;
                consumed.conference = true;
            }
            None => {}
        }

        if let LeagueView::Section { rules, .. } = &spec.league {
            if let Some(toggle) = first_rule(rules, text) {
                self.in_league = *toggle == Toggle::Enter;
                consumed.league = true;
            }
        }

        if let Some(&conference) = first_rule(spec.playoffs.conferences, text) {
            self.playoff_conference = Some(conference);
        }
        if let PlayoffSplit::Markers(rules) = &spec.playoffs.split {
            if let Some(section) = first_rule(rules, text) {
                if self.section != Some(*section) {
                    logd!("{}: playoff section {:?} ({:?})", spec.title, section, self.playoff_conference);
                }
                self.section = Some(*section);
                consumed.playoffs = true;
            }
        }

        consumed
    }

    /// (conference, group) while a group is open.
    pub fn division_scope(&self) -> Option<(&'static str, &'static str)> {
        if self.in_group { self.group } else { None }
    }

    pub fn conference_scope(&self) -> Option<&'static str> {
        if self.in_conference { self.conference } else { None }
    }

    pub fn in_league(&self) -> bool {
        self.in_league
    }

    pub fn playoff_conference(&self) -> Option<&'static str> {
        self.playoff_conference
    }

    pub fn section(&self) -> Option<Section> {
        self.section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{nba, nfl};

    fn feed(spec: &LeagueSpec, lines: &[&str]) -> Tracker {
        let mut t = Tracker::new();
        for l in lines {
            t.observe(spec, l);
        }
        t
    }

    #[test]
    fn nfl_division_headers_stick() {
        let spec = nfl::spec();
        let t = feed(spec, &["AFC North:", "", "some footer"]);
        assert_eq!(t.division_scope(), Some(("AFC", "North")));
    }

    #[test]
    fn nba_groups_close_on_blank_and_footer() {
        let spec = nba::spec();
        let mut t = Tracker::new();
        let c = t.observe(spec, "East B:");
        assert!(c.division);
        assert_eq!(t.division_scope(), Some(("Eastern", "B")));
        t.observe(spec, "");
        assert_eq!(t.division_scope(), None);

        t.observe(spec, "West C:");
        t.observe(spec, "* clinched");
        assert_eq!(t.division_scope(), None);
    }

    #[test]
    fn nfl_conference_section_opens_and_closes() {
        let spec = nfl::spec();
        let mut t = Tracker::new();
        t.observe(spec, "American Football Conference:");
        assert_eq!(t.conference_scope(), Some("AFC"));
        t.observe(spec, "National Football Conference:");
        assert_eq!(t.conference_scope(), Some("NFC"));
        t.observe(spec, "NFL:");
        assert_eq!(t.conference_scope(), None);
        assert!(t.in_league());
        t.observe(spec, "Division Leaders:");
        assert!(!t.in_league());
    }

    #[test]
    fn nba_knockout_header_parks_the_conference() {
        let spec = nba::spec();
        let mut t = Tracker::new();
        t.observe(spec, "East A:");
        assert_eq!(t.conference_scope(), Some("Eastern"));
        t.observe(spec, "Eastern Conference Knockout Round:");
        assert_eq!(t.conference_scope(), None);
        // the playoff view saw a conference marker too
        assert_eq!(t.playoff_conference(), Some("Eastern"));
        t.observe(spec, "plaintextsports.com");
        assert_eq!(t.conference_scope(), None);
    }

    #[test]
    fn nfl_playoff_sections() {
        let spec = nfl::spec();
        let mut t = Tracker::new();
        t.observe(spec, "National Football Conference");
        let c = t.observe(spec, "Wild Card:");
        assert!(c.playoffs);
        assert_eq!(t.section(), Some(Section::WildCard));
        t.observe(spec, "=================");
        assert_eq!(t.section(), Some(Section::Eliminated));
        assert_eq!(t.playoff_conference(), Some("NFC"));
    }

    #[test]
    fn unrelated_text_changes_nothing() {
        let spec = nfl::spec();
        let before = feed(spec, &["AFC East:", "American Football Conference:"]);
        let mut after = before.clone();
        let c = after.observe(spec, "Standings as of Sunday");
        assert_eq!(c, Consumed::default());
        assert_eq!(after, before);
    }
}
