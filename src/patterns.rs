//! Pattern entries and their last-use stamps.
//!
//! The set is created once at startup and never shrinks. Invalid patterns
//! stay in it; they are skipped per menu build instead.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};

use crate::config::AppConfig;
use crate::locale::LocaleInfo;

/// One pattern offered in the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub pattern: String,
    /// 1-based index in the list the pattern came from
    pub position: usize,
    /// `None` until the entry is selected for the first time
    pub last_used: Option<DateTime<FixedOffset>>,
}

impl PatternEntry {
    pub fn is_used(&self) -> bool {
        self.last_used.is_some()
    }
}

/// Where the pattern list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSource {
    CommandLine,
    Locale,
}

impl std::fmt::Display for PatternSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternSource::CommandLine => write!(f, "command line"),
            PatternSource::Locale => write!(f, "locale"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    entries: Vec<PatternEntry>,
}

impl PatternSet {
    /// Use the command line patterns if there are any, otherwise the locale's.
    pub fn resolve(config: &AppConfig, locale: &LocaleInfo) -> (Self, PatternSource) {
        if config.has_explicit_patterns() {
            (
                Self::from_patterns(config.patterns.iter().cloned()),
                PatternSource::CommandLine,
            )
        } else {
            (Self::from_patterns(locale.all_patterns()), PatternSource::Locale)
        }
    }

    /// Drop exact duplicates. The first occurrence keeps its position.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let entries = patterns
            .into_iter()
            .map(Into::into)
            .enumerate()
            .filter(|(_, pattern)| seen.insert(pattern.clone()))
            .map(|(i, pattern)| PatternEntry {
                pattern,
                position: i + 1,
                last_used: None,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&PatternEntry> {
        self.entries.get(index)
    }

    /// Stamp one entry. Returns false for an unknown index.
    pub fn mark_used(&mut self, index: usize, at: DateTime<FixedOffset>) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.last_used = Some(at);
                true
            },
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
