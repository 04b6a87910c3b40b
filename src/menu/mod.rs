//! Tray menu snapshots.
//!
//! A snapshot is rebuilt every time the menu opens. It renders every pattern
//! against one instant, drops the ones that fail and orders the rest:
//! never-used entries by position, then a separator and the used entries
//! by (last use, position). A separator and `Exit` always close the menu.

#[cfg(test)]
mod tests;

use chrono::{DateTime, FixedOffset};

use crate::format;
use crate::locale::LocaleInfo;
use crate::patterns::PatternSet;

/// Glyph between the rendered text and its pattern in an entry label.
pub const LABEL_DELIMITER: char = '\u{00ab}';

/// Menu id of the Exit command.
pub const EXIT_ID: &str = "exit";

const ENTRY_ID_PREFIX: &str = "pattern-";

/// A pattern rendered for one menu build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Index into the `PatternSet` the snapshot was built from
    pub index: usize,
    pub position: usize,
    pub pattern: String,
    /// What gets copied to the clipboard
    pub text: String,
}

impl MenuEntry {
    pub fn id(&self) -> String {
        entry_id(self.index)
    }

    /// Item text for the native menu. A lone `&` marks a mnemonic in muda,
    /// so literal ampersands are doubled.
    pub fn label(&self) -> String {
        format!("{} {} {}", self.text, LABEL_DELIMITER, self.pattern).replace('&', "&&")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSlot {
    Entry(MenuEntry),
    Separator,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSnapshot {
    slots: Vec<MenuSlot>,
}

impl MenuSnapshot {
    pub fn build(patterns: &PatternSet, now: &DateTime<FixedOffset>, locale: &LocaleInfo) -> Self {
        let rendered: Vec<_> = patterns
            .entries()
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let text = format::format(now, &entry.pattern, locale).ok()?;
                Some((entry.last_used, MenuEntry {
                    index,
                    position: entry.position,
                    pattern: entry.pattern.clone(),
                    text,
                }))
            })
            .collect();

        let (mut used, mut unused): (Vec<_>, Vec<_>) =
            rendered.into_iter().partition(|(last_used, _)| last_used.is_some());

        unused.sort_by_key(|(_, entry)| entry.position);
        used.sort_by_key(|(last_used, entry)| (*last_used, entry.position));

        let mut slots: Vec<MenuSlot> = unused
            .into_iter()
            .map(|(_, entry)| MenuSlot::Entry(entry))
            .collect();
        if !used.is_empty() {
            slots.push(MenuSlot::Separator);
            slots.extend(used.into_iter().map(|(_, entry)| MenuSlot::Entry(entry)));
        }
        slots.push(MenuSlot::Separator);
        slots.push(MenuSlot::Exit);

        Self { slots }
    }

    pub fn slots(&self) -> &[MenuSlot] {
        &self.slots
    }

    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.slots.iter().filter_map(|slot| match slot {
            MenuSlot::Entry(entry) => Some(entry),
            _ => None,
        })
    }

    /// Entry shown under `id` in this snapshot.
    pub fn find(&self, id: &str) -> Option<&MenuEntry> {
        let index = parse_entry_id(id)?;
        self.entries().find(|entry| entry.index == index)
    }
}

impl Default for MenuSnapshot {
    /// The menu before any pattern rendered: just `Exit`.
    fn default() -> Self {
        Self {
            slots: vec![MenuSlot::Exit],
        }
    }
}

pub fn entry_id(index: usize) -> String {
    format!("{}{}", ENTRY_ID_PREFIX, index)
}

fn parse_entry_id(id: &str) -> Option<usize> {
    id.strip_prefix(ENTRY_ID_PREFIX)?.parse().ok()
}
