// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::{FETCH_TIMEOUT_SECS, SUMMARY_TOP};
use crate::config::options::{LeagueKind, ScrapeOptions, Source};
use crate::core::net::HttpFetcher;
use crate::model::error_body;
use crate::progress::Progress;
use crate::scrape::collect_standings;

/// Scrape plaintextsports.com standings and print them as JSON.
#[derive(Debug, Parser)]
#[command(name = "standings", version)]
pub struct Args {
    /// nfl or nba
    #[arg(default_value = "nfl")]
    pub league: LeagueKind,

    /// Override the standings page URL
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Parse a saved copy of the page instead of fetching it
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long)]
    pub pretty: bool,

    /// Print team counts and the best records instead of JSON
    #[arg(long)]
    pub summary: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> ScrapeOptions {
        let mut options = ScrapeOptions::for_league(self.league);
        if let Some(url) = &self.url {
            options.source = Source::Remote(url.clone());
        }
        if let Some(path) = &self.file {
            options.source = Source::File(path.clone());
        }
        options.timeout = Duration::from_secs(self.timeout);
        options
    }
}

/// Stage messages go to the debug log.
struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, league: &str) {
        logd!("{league}: starting");
    }
    fn log(&mut self, msg: &str) {
        logd!("{msg}");
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::logging::init(args.verbose);

    let options = args.options();
    let fetcher = HttpFetcher::new()?;
    let model = match collect_standings(&fetcher, &options, Some(&mut LogProgress)) {
        Ok(model) => model,
        Err(e) => {
            println!("{}", error_body(&e));
            return Err(e.into());
        }
    };

    if args.summary {
        print!("{}", model.summary(SUMMARY_TOP));
    } else {
        println!("{}", model.to_json(args.pretty)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_options() {
        let args = Args::parse_from(["standings", "nba", "--file", "page.html", "--timeout", "3"]);
        let o = args.options();
        assert_eq!(o.league, LeagueKind::Nba);
        assert_eq!(o.source, Source::File(PathBuf::from("page.html")));
        assert_eq!(o.timeout, Duration::from_secs(3));
    }

    #[test]
    fn defaults_to_nfl_remote() {
        let o = Args::parse_from(["standings"]).options();
        assert_eq!(o, ScrapeOptions::default());
    }

    #[test]
    fn url_and_file_conflict() {
        assert!(Args::try_parse_from(["standings", "--url", "http://x", "--file", "y"]).is_err());
    }
}
