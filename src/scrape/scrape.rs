// src/scrape/scrape.rs
use std::fs;

use crate::{
    config::options::{ScrapeOptions, Source},
    core::{html, net::Fetch},
    engine,
    error::FetchError,
    model::StandingsModel,
    progress::{NullProgress, Progress},
};

fn load(fetcher: &dyn Fetch, options: &ScrapeOptions) -> Result<String, FetchError> {
    match &options.source {
        Source::Remote(url) => fetcher.fetch(url, options.timeout),
        Source::File(path) => fs::read_to_string(path).map_err(|source| FetchError::Read {
            path: path.clone(),
            source,
        }),
    }
}

/// Fetch one league's standings page and parse it into a fresh model.
///
/// A failed fetch is an `Err`, never an empty model: callers can tell
/// "site down" from "nothing recognized on the page".
pub fn collect_standings(
    fetcher: &dyn Fetch,
    options: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<StandingsModel, FetchError> {
    let spec = options.league.spec();
    let mut null = NullProgress;
    let p: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    p.begin(spec.title);
    p.log(&format!("Fetching {}…", options.source));

    let doc = match load(fetcher, options) {
        Ok(doc) => doc,
        Err(e) => {
            loge!("{}: {}", spec.title, e);
            p.log(&format!("Failed: {e}"));
            p.finish(false);
            return Err(e);
        }
    };

    let fragments = html::fragments(&doc);
    logf!("{}: {} bytes from {}, {} fragments", spec.title, doc.len(), options.source, fragments.len());

    let model = engine::parse(spec, &fragments);
    if model.is_empty() {
        logw!("{}: no standings recognized in {}", spec.title, options.source);
    }

    p.log(&format!("{} teams in the league view", model.league.len()));
    p.finish(true);
    Ok(model)
}
