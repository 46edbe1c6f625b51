//! # Word Catalogs
//!
//! Two independent word lists back password synthesis:
//!
//! - **simple**: short, common words. Loaded once at startup and kept for the
//!   life of the process.
//! - **extra**: a larger list of longer and rarer words. Loaded only while the
//!   user has extra words enabled; unloading drops its storage entirely.
//!
//! Each catalog maps a dense key range `[0, count)` to a word. The keys are the
//! positions in a `Vec`, so density and uniqueness hold by construction.
//!
//! Loading never fails hard: an unreadable or empty source leaves an empty
//! catalog behind and logs a warning, so the application stays usable with
//! whatever did load.

use crate::error::{DiceError, Result};
use std::fmt;
use std::fs;
use std::path::PathBuf;

const BUNDLED_SIMPLE: &str = include_str!("resources/words-simple.txt");
const BUNDLED_EXTRA: &str = include_str!("resources/words-extra.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Simple,
    Extra,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Simple => write!(f, "simple"),
            CatalogKind::Extra => write!(f, "extra"),
        }
    }
}

/// Where a catalog's words come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// The list compiled into the binary.
    #[default]
    Bundled,
    /// A plain-text file with one word per line.
    File(PathBuf),
}

impl WordSource {
    pub fn read(&self, which: CatalogKind) -> Result<String> {
        match self {
            WordSource::Bundled => Ok(match which {
                CatalogKind::Simple => BUNDLED_SIMPLE,
                CatalogKind::Extra => BUNDLED_EXTRA,
            }
            .to_string()),
            WordSource::File(path) => fs::read_to_string(path).map_err(DiceError::Io),
        }
    }
}

/// Per-catalog sources, set once from the command line.
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub simple: WordSource,
    pub extra: WordSource,
}

impl CatalogSources {
    pub fn get(&self, which: CatalogKind) -> &WordSource {
        match which {
            CatalogKind::Simple => &self.simple,
            CatalogKind::Extra => &self.extra,
        }
    }
}

/// Splits a word list into words: one per line, surrounding whitespace
/// trimmed, blank lines skipped.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads and parses one catalog source.
///
/// Returns the words and their count. Read failures produce an empty list and
/// a warning rather than an error.
pub fn load_words(source: &WordSource, which: CatalogKind) -> (Vec<String>, usize) {
    let words = match source.read(which) {
        Ok(text) => parse_words(&text),
        Err(e) => {
            tracing::warn!(catalog = %which, error = %e, "failed to read word list");
            Vec::new()
        }
    };
    if words.is_empty() {
        tracing::warn!(catalog = %which, "word list is empty");
    }
    let count = words.len();
    (words, count)
}

#[derive(Debug, Default, Clone)]
pub struct WordCatalog {
    simple: Vec<String>,
    extra: Vec<String>,
}

impl WordCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog directly from word lists. Mostly useful in tests.
    pub fn from_words<S: Into<String>>(
        simple: impl IntoIterator<Item = S>,
        extra: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            simple: simple.into_iter().map(Into::into).collect(),
            extra: extra.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads `which` from `source`, replacing whatever that catalog held.
    pub fn load(&mut self, source: &WordSource, which: CatalogKind) -> usize {
        let (words, count) = load_words(source, which);
        *self.slot_mut(which) = words;
        tracing::info!(catalog = %which, count, "loaded word list");
        count
    }

    /// Drops a catalog's words and frees the backing allocation.
    pub fn unload(&mut self, which: CatalogKind) {
        *self.slot_mut(which) = Vec::new();
        tracing::info!(catalog = %which, "unloaded word list");
    }

    pub fn count(&self, which: CatalogKind) -> usize {
        self.slot(which).len()
    }

    pub fn is_loaded(&self, which: CatalogKind) -> bool {
        !self.slot(which).is_empty()
    }

    pub fn get(&self, which: CatalogKind, key: usize) -> Option<&str> {
        self.slot(which).get(key).map(String::as_str)
    }

    /// Number of words drawable when synthesizing.
    pub fn active_len(&self, use_extra: bool) -> usize {
        if use_extra {
            self.simple.len() + self.extra.len()
        } else {
            self.simple.len()
        }
    }

    /// Indexes the active catalog: simple words first, then extra words.
    pub fn active_word(&self, use_extra: bool, index: usize) -> Option<&str> {
        if index < self.simple.len() {
            return self.get(CatalogKind::Simple, index);
        }
        if use_extra {
            return self.get(CatalogKind::Extra, index - self.simple.len());
        }
        None
    }

    /// Iterates every word in the active catalog.
    pub fn active_words(&self, use_extra: bool) -> impl Iterator<Item = &str> {
        let extra: &[String] = if use_extra { &self.extra } else { &[] };
        self.simple.iter().chain(extra.iter()).map(String::as_str)
    }

    /// Heap bytes currently held by a catalog, including the vector itself.
    pub fn storage_bytes(&self, which: CatalogKind) -> usize {
        let words = self.slot(which);
        words.capacity() * std::mem::size_of::<String>()
            + words.iter().map(String::capacity).sum::<usize>()
    }

    fn slot(&self, which: CatalogKind) -> &Vec<String> {
        match which {
            CatalogKind::Simple => &self.simple,
            CatalogKind::Extra => &self.extra,
        }
    }

    fn slot_mut(&mut self, which: CatalogKind) -> &mut Vec<String> {
        match which {
            CatalogKind::Simple => &mut self.simple,
            CatalogKind::Extra => &mut self.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_words_skips_blank_lines() {
        let words = parse_words("alpha\n\n  beta \r\ngamma\n   \n");
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_bundled_lists_load() {
        let mut catalog = WordCatalog::new();
        let simple = catalog.load(&WordSource::Bundled, CatalogKind::Simple);
        let extra = catalog.load(&WordSource::Bundled, CatalogKind::Extra);
        assert!(simple > 100);
        assert!(extra > 100);
        assert_eq!(catalog.count(CatalogKind::Simple), simple);
        assert_eq!(catalog.count(CatalogKind::Extra), extra);
    }

    #[test]
    fn test_bundled_lists_have_no_duplicates() {
        for which in [CatalogKind::Simple, CatalogKind::Extra] {
            let (words, count) = load_words(&WordSource::Bundled, which);
            let unique: HashSet<&String> = words.iter().collect();
            assert_eq!(unique.len(), count, "{} list has duplicates", which);
        }
    }

    #[test]
    fn test_keys_are_dense() {
        let mut catalog = WordCatalog::new();
        let count = catalog.load(&WordSource::Bundled, CatalogKind::Simple);
        for key in 0..count {
            assert!(catalog.get(CatalogKind::Simple, key).is_some());
        }
        assert!(catalog.get(CatalogKind::Simple, count).is_none());
    }

    #[test]
    fn test_load_replaces_rather_than_appends() {
        let mut catalog = WordCatalog::new();
        let first = catalog.load(&WordSource::Bundled, CatalogKind::Simple);
        let second = catalog.load(&WordSource::Bundled, CatalogKind::Simple);
        assert_eq!(first, second);
        assert_eq!(catalog.count(CatalogKind::Simple), first);
    }

    #[test]
    fn test_missing_file_yields_empty_catalog() {
        let mut catalog = WordCatalog::new();
        let source = WordSource::File(PathBuf::from("/nonexistent/dicepass/words.txt"));
        let count = catalog.load(&source, CatalogKind::Extra);
        assert_eq!(count, 0);
        assert!(!catalog.is_loaded(CatalogKind::Extra));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "one\ntwo\nthree\n").unwrap();

        let mut catalog = WordCatalog::new();
        let count = catalog.load(&WordSource::File(path), CatalogKind::Simple);
        assert_eq!(count, 3);
        assert_eq!(catalog.get(CatalogKind::Simple, 1), Some("two"));
    }

    #[test]
    fn test_toggle_round_trip_keeps_count_and_frees_storage() {
        let mut catalog = WordCatalog::new();
        let before = catalog.load(&WordSource::Bundled, CatalogKind::Extra);
        let loaded_bytes = catalog.storage_bytes(CatalogKind::Extra);
        assert!(loaded_bytes > 0);

        catalog.unload(CatalogKind::Extra);
        assert_eq!(catalog.count(CatalogKind::Extra), 0);
        assert_eq!(catalog.storage_bytes(CatalogKind::Extra), 0);

        let after = catalog.load(&WordSource::Bundled, CatalogKind::Extra);
        assert_eq!(before, after);
    }

    #[test]
    fn test_active_word_spans_union() {
        let catalog = WordCatalog::from_words(["a", "b"], ["c"]);
        assert_eq!(catalog.active_len(false), 2);
        assert_eq!(catalog.active_len(true), 3);
        assert_eq!(catalog.active_word(true, 2), Some("c"));
        assert_eq!(catalog.active_word(false, 2), None);
        let all: Vec<&str> = catalog.active_words(true).collect();
        assert_eq!(all, vec!["a", "b", "c"]);
    }
}
