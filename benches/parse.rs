// benches/parse.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use pts_standings::{core::html, engine, specs::nfl};

const DIVISIONS: &[(&str, [&str; 4])] = &[
    ("AFC East", ["BUF", "MIA", "NYJ", "NE"]),
    ("AFC North", ["BAL", "PIT", "CIN", "CLE"]),
    ("AFC South", ["HOU", "IND", "JAX", "TEN"]),
    ("AFC West", ["KC", "LAC", "DEN", "LV"]),
    ("NFC East", ["PHI", "DAL", "WAS", "NYG"]),
    ("NFC North", ["DET", "GB", "MIN", "CHI"]),
    ("NFC South", ["TB", "ATL", "NO", "CAR"]),
    ("NFC West", ["SF", "SEA", "LAR", "ARI"]),
];

/// Synthetic full-league page: divisions, both conference lists, the league
/// list and a playoff picture per conference.
fn sample_lines() -> Vec<String> {
    let row = |t: &str, k: usize| format!("{t}  {}  {}  0", 11 - 2 * k, 1 + 2 * k);
    let conf = |c: &str| -> Vec<String> {
        DIVISIONS
            .iter()
            .filter(|(d, _)| d.starts_with(c))
            .flat_map(|(_, ts)| ts.iter().enumerate().map(|(k, t)| row(t, k)))
            .collect()
    };

    let mut out = Vec::new();
    for (label, teams) in DIVISIONS {
        out.push(format!("{label}:"));
        out.extend(teams.iter().enumerate().map(|(k, t)| row(t, k)));
    }
    out.push("American Football Conference:".into());
    out.extend(conf("AFC"));
    out.push("National Football Conference:".into());
    out.extend(conf("NFC"));
    out.push("NFL:".into());
    out.extend(conf("AFC"));
    out.extend(conf("NFC"));
    for (marker, c) in [("American Football Conference", "AFC"), ("National Football Conference", "NFC")] {
        out.push(marker.into());
        out.push("Division Leaders:".into());
        let teams: Vec<&str> = DIVISIONS.iter().filter(|(d, _)| d.starts_with(c)).map(|(_, ts)| ts[0]).collect();
        out.extend(teams.iter().enumerate().map(|(i, t)| format!("{}:{t} 11 1 0", i + 1)));
        out.push("Wild Card:".into());
        out.push("============".into());
        out.push(format!("{}-e 3 9 0", DIVISIONS[0].1[3]));
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let lines = sample_lines();
    let doc = format!(
        "<html><body>{}</body></html>",
        lines.iter().map(|l| format!("<div>{l}</div>")).collect::<String>()
    );

    c.bench_function("nfl_parse_fragments", |b| {
        b.iter(|| {
            let m = engine::parse(nfl::spec(), black_box(&lines));
            black_box(m.team_count())
        })
    });

    c.bench_function("nfl_html_to_model", |b| {
        b.iter(|| {
            let fragments = html::fragments(black_box(&doc));
            black_box(engine::parse(nfl::spec(), &fragments).team_count())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
