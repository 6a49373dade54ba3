// src/scrape/mod.rs
mod scrape;

pub use scrape::collect_standings;
