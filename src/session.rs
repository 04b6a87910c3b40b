//! Menu state for the lifetime of the tray icon.
//!
//! Created in the setup hook and held as Tauri managed state. The snapshot
//! here is the menu the user is looking at, so a selection copies exactly
//! the text that was shown.

use crate::clock::Clock;
use crate::locale::LocaleInfo;
use crate::menu::{MenuEntry, MenuSnapshot};
use crate::patterns::PatternSet;

pub struct Session {
    patterns: PatternSet,
    locale: LocaleInfo,
    clock: Box<dyn Clock>,
    snapshot: MenuSnapshot,
}

impl Session {
    pub fn new(patterns: PatternSet, locale: LocaleInfo, clock: Box<dyn Clock>) -> Self {
        Self {
            patterns,
            locale,
            clock,
            snapshot: MenuSnapshot::default(),
        }
    }

    /// Rebuild the snapshot from the current time.
    pub fn open_menu(&mut self) -> &MenuSnapshot {
        let now = self.clock.now();
        self.snapshot = MenuSnapshot::build(&self.patterns, &now, &self.locale);
        &self.snapshot
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> &MenuSnapshot {
        &self.snapshot
    }

    /// Entry behind a menu id of the last built snapshot.
    pub fn selection(&self, id: &str) -> Option<&MenuEntry> {
        self.snapshot.find(id)
    }

    /// Act on a click: stamp the entry shown under `id`, then hand its text
    /// to `write`.
    ///
    /// The stamp lands before `write` runs and stays even when it fails.
    /// Returns `Ok(None)` for ids outside the current snapshot, without
    /// calling `write`.
    pub fn select<E>(
        &mut self,
        id: &str,
        write: impl FnOnce(&str) -> Result<(), E>,
    ) -> Result<Option<String>, E> {
        let Some(entry) = self.selection(id) else {
            return Ok(None);
        };
        let (index, text) = (entry.index, entry.text.clone());

        self.mark_used(index);
        write(&text)?;
        Ok(Some(text))
    }

    /// Stamp an entry with the current time.
    pub fn mark_used(&mut self, index: usize) -> bool {
        let now = self.clock.now();
        self.patterns.mark_used(index, now)
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    #[cfg(test)]
    pub fn locale(&self) -> &LocaleInfo {
        &self.locale
    }
}
