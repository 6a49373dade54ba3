// src/engine/engine.rs
use std::time::Instant;

use crate::model::{StandingsModel, TeamRecord};

use super::accumulate::{Accumulator, Conferences, Divisions, League, Offer, Playoffs};
use super::extract::to_record;
use super::line::{Fields, Line};
use super::tracker::{Consumed, Tracker};
use super::types::{LeagueSpec, LeagueView, PlayoffSplit, Section};

/// Everything one run accumulates. Owned by a single `parse` call.
struct Board {
    divisions: Divisions,
    conferences: Conferences,
    league: League,
    playoffs: Playoffs,
}

impl Board {
    fn new(spec: &LeagueSpec) -> Self {
        Self {
            divisions: Divisions::new(spec),
            conferences: Conferences::new(spec),
            league: League::default(),
            playoffs: Playoffs::new(spec),
        }
    }
}

/// One linear pass over the fragments of a standings page.
///
/// Fragments are trimmed here and nowhere else. Anything the tracker and the
/// line classifier don't recognize is skipped; a page that matches nothing
/// still yields a model (with every configured key, all lists empty).
pub fn parse<I, S>(spec: &LeagueSpec, fragments: I) -> StandingsModel
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let t = Instant::now();
    let mut tracker = Tracker::new();
    let mut board = Board::new(spec);
    let mut seen = 0usize;

    for fragment in fragments {
        let text = fragment.as_ref().trim();
        seen += 1;
        let consumed = tracker.observe(spec, text);
        let line = Line::classify(text);
        if let Line::Rows(_) = line {
            route(spec, &tracker, consumed, &line, &mut board);
        }
    }

    let model = assemble(spec, board);
    logf!(
        "{}: {} fragments → {} league / {} conference teams in {:?}",
        spec.title,
        seen,
        model.league.len(),
        model.conference.values().map(Vec::len).sum::<usize>(),
        t.elapsed()
    );
    model
}

fn record(spec: &LeagueSpec, fields: &Fields, seeded: bool) -> Option<TeamRecord> {
    to_record(fields, spec.arity, seeded, spec.names)
}

fn note(view: &str, offer: Offer, abbr: &str) {
    if offer == Offer::Full {
        logd!("{view}: scope full, dropped {abbr}");
    }
}

fn route(spec: &LeagueSpec, tracker: &Tracker, consumed: Consumed, line: &Line, board: &mut Board) {
    // division
    if !consumed.division {
        if let (Some((conference, group)), Some(fields)) =
            (tracker.division_scope(), line.row(spec.division.rows))
        {
            if let Some(rec) = record(spec, fields, false) {
                let division = spec.division.label(conference, group);
                note("division", board.divisions.offer((conference, division), rec), fields.abbr);
            }
        }
    }

    // conference
    if !consumed.conference {
        if let (Some(conference), Some(fields)) = (tracker.conference_scope(), line.row(spec.conference.rows)) {
            if let Some(rec) = record(spec, fields, false) {
                note("conference", board.conferences.offer(conference, rec), fields.abbr);
            }
        }
    }

    // league
    if let LeagueView::Section { rows, .. } = &spec.league {
        if !consumed.league && tracker.in_league() {
            if let Some(rec) = line.row(*rows).and_then(|f| record(spec, f, false)) {
                board.league.offer((), rec);
            }
        }
    }

    // playoffs
    if !consumed.playoffs {
        if let Some(conference) = tracker.playoff_conference() {
            if let Some((section, fields, seeded)) = playoff_target(spec, tracker, line) {
                if let Some(rec) = record(spec, fields, seeded) {
                    board.playoffs.offer((conference, section), rec);
                }
            }
        }
    }
}

/// Where a row lands in the playoff picture, if anywhere. `-e` rows are
/// eliminated no matter which section is open.
fn playoff_target<'l, 'a>(
    spec: &LeagueSpec,
    tracker: &Tracker,
    line: &'l Line<'a>,
) -> Option<(Section, &'l Fields<'a>, bool)> {
    if let Some(fields) = line.seeded() {
        if fields.is_eliminated() {
            return Some((Section::Eliminated, fields, true));
        }
        let section = match spec.playoffs.split {
            PlayoffSplit::Markers(_) => tracker.section()?,
            PlayoffSplit::Seed { leaders_through } => match fields.rank {
                Some(seed) if seed <= leaders_through => Section::DivisionLeaders,
                _ => Section::WildCard,
            },
        };
        return Some((section, fields, true));
    }
    line.eliminated().map(|fields| (Section::Eliminated, fields, false))
}

/// Model Assembler: freeze the accumulators into the output shape.
fn assemble(spec: &LeagueSpec, board: Board) -> StandingsModel {
    let Board { divisions, conferences, mut league, playoffs } = board;

    if let LeagueView::FromConferences = spec.league {
        for layout in spec.conferences {
            for team in conferences.get(layout.key) {
                league.offer((), team.clone());
            }
        }
    }

    StandingsModel {
        division: divisions
            .into_table()
            .into_iter()
            .map(|(conf, divs)| (s!(conf), divs.into_iter().map(|(d, teams)| (s!(d), teams)).collect()))
            .collect(),
        conference: conferences.into_table().into_iter().map(|(conf, teams)| (s!(conf), teams)).collect(),
        league: league.into_teams(),
        playoffs: playoffs.into_table().into_iter().map(|(conf, p)| (s!(conf), p)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{nba, nfl};

    #[test]
    fn empty_input_still_has_every_key() {
        let m = parse(nfl::spec(), Vec::<String>::new());
        assert!(m.is_empty());
        assert_eq!(m.division["AFC"].len(), 4);
        assert_eq!(m.division["NFC"].len(), 4);
        assert_eq!(m.conference.len(), 2);
        assert_eq!(m.playoffs.len(), 2);

        let m = parse(nba::spec(), ["", "nothing here"]);
        assert!(m.is_empty());
        assert!(m.division["Eastern"].contains_key("Atlantic"));
        assert!(m.division["Western"].contains_key("Southwest"));
    }

    #[test]
    fn fragments_are_trimmed() {
        let m = parse(nfl::spec(), ["  AFC West:  ", "\tKC 10 2 0 \n"]);
        assert_eq!(m.division["AFC"]["West"][0].abbreviation, "KC");
    }

    #[test]
    fn seeded_row_without_a_section_is_ignored() {
        let m = parse(nfl::spec(), ["American Football Conference", "1:KC 10 2 0"]);
        assert!(m.playoffs["AFC"].is_empty());
    }

    #[test]
    fn eliminated_row_ignores_the_open_section() {
        let m = parse(
            nfl::spec(),
            ["American Football Conference", "Wild Card:", "5:LAC 8 4 0", "NYJ-e 3 9 0"],
        );
        let afc = &m.playoffs["AFC"];
        assert_eq!(afc.wild_card[0].seed, Some(5));
        assert_eq!(afc.eliminated[0].abbreviation, "NYJ");
        assert_eq!(afc.eliminated[0].seed, None);
    }

    #[test]
    fn nba_seed_split() {
        let m = parse(
            nba::spec(),
            ["Eastern Conference", "6:ORL 10 8", "7:ATL 9 9", "CHA-e 2 16"],
        );
        let east = &m.playoffs["Eastern"];
        assert_eq!(east.division_leaders[0].abbreviation, "ORL");
        assert_eq!(east.wild_card[0].abbreviation, "ATL");
        assert_eq!(east.eliminated[0].name, "Charlotte Hornets");
        assert_eq!(east.wild_card[0].ties, None);
    }
}
