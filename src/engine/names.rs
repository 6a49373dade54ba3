// src/engine/names.rs
use std::collections::HashMap;

/// Abbreviation → full team name for one league. Alternate abbreviations of
/// the same franchise are separate keys with the same name.
///
/// Built once per process (see the `LazyLock`s in `specs`) and never mutated.
pub struct NameTable {
    names: HashMap<&'static str, &'static str>,
}

impl NameTable {
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self { names: pairs.iter().copied().collect() }
    }

    pub fn get(&self, abbr: &str) -> Option<&'static str> {
        self.names.get(abbr).copied()
    }

    /// Full name, or the abbreviation itself when unknown.
    pub fn resolve<'a>(&self, abbr: &'a str) -> &'a str {
        self.get(abbr).unwrap_or(abbr)
    }
}
