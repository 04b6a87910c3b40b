use chrono::{Duration, TimeZone};

use super::*;

fn at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2015, 4, 12, hour, minute, 0)
        .unwrap()
}

fn sample_patterns() -> PatternSet {
    PatternSet::from_patterns(["yyyy-MM-dd", "bogus-pattern-!!", "HH:mm"])
}

/// Shape of a snapshot: pattern for entries, "-" for separators.
fn layout(snapshot: &MenuSnapshot) -> Vec<String> {
    snapshot
        .slots()
        .iter()
        .map(|slot| match slot {
            MenuSlot::Entry(entry) => entry.pattern.clone(),
            MenuSlot::Separator => "-".to_string(),
            MenuSlot::Exit => "Exit".to_string(),
        })
        .collect()
}

#[test]
fn test_invalid_pattern_is_dropped() {
    let locale = LocaleInfo::invariant();
    let snapshot = MenuSnapshot::build(&sample_patterns(), &at(9, 30), &locale);

    assert_eq!(layout(&snapshot), vec!["yyyy-MM-dd", "HH:mm", "-", "Exit"]);

    let labels: Vec<_> = snapshot.entries().map(MenuEntry::label).collect();
    assert_eq!(labels, vec!["2015-04-12 « yyyy-MM-dd", "09:30 « HH:mm"]);
}

#[test]
fn test_label_escapes_ampersand() {
    let locale = LocaleInfo::invariant();
    let patterns = PatternSet::from_patterns(["'R&D' yyyy"]);
    let snapshot = MenuSnapshot::build(&patterns, &at(9, 30), &locale);

    let entry = snapshot.entries().next().unwrap();
    assert_eq!(entry.text, "R&D 2015");
    assert_eq!(entry.label(), "R&&D 2015 « 'R&&D' yyyy");
}

#[test]
fn test_selected_entry_moves_below_separator() {
    let locale = LocaleInfo::invariant();
    let mut patterns = sample_patterns();

    let snapshot = MenuSnapshot::build(&patterns, &at(9, 30), &locale);
    let chosen = snapshot.find(&entry_id(2)).unwrap();
    assert_eq!(chosen.pattern, "HH:mm");
    patterns.mark_used(chosen.index, at(9, 31));

    let snapshot = MenuSnapshot::build(&patterns, &at(9, 32), &locale);
    assert_eq!(
        layout(&snapshot),
        vec!["yyyy-MM-dd", "-", "HH:mm", "-", "Exit"]
    );
    assert_eq!(snapshot.entries().next().unwrap().position, 1);
}

#[test]
fn test_used_entries_sorted_by_last_use() {
    let locale = LocaleInfo::invariant();
    let mut patterns = PatternSet::from_patterns(["d", "t", "T", "s"]);

    patterns.mark_used(3, at(10, 0));
    patterns.mark_used(0, at(10, 5));
    patterns.mark_used(3, at(10, 10));

    let snapshot = MenuSnapshot::build(&patterns, &at(11, 0), &locale);
    assert_eq!(layout(&snapshot), vec!["t", "T", "-", "d", "s", "-", "Exit"]);
}

#[test]
fn test_equal_stamps_fall_back_to_position() {
    let locale = LocaleInfo::invariant();
    let mut patterns = PatternSet::from_patterns(["d", "t", "T"]);

    patterns.mark_used(2, at(10, 0));
    patterns.mark_used(1, at(10, 0));

    let snapshot = MenuSnapshot::build(&patterns, &at(11, 0), &locale);
    assert_eq!(layout(&snapshot), vec!["d", "-", "t", "T", "-", "Exit"]);
}

#[test]
fn test_all_used_keeps_single_group_separator() {
    let locale = LocaleInfo::invariant();
    let mut patterns = PatternSet::from_patterns(["t", "T"]);
    patterns.mark_used(0, at(10, 0));
    patterns.mark_used(1, at(10, 1));

    let snapshot = MenuSnapshot::build(&patterns, &at(11, 0), &locale);
    assert_eq!(layout(&snapshot), vec!["-", "t", "T", "-", "Exit"]);
}

#[test]
fn test_rebuild_without_selection_is_stable() {
    let locale = LocaleInfo::invariant();
    let mut patterns = PatternSet::from_patterns(locale.all_patterns());
    patterns.mark_used(4, at(8, 0));

    let first = MenuSnapshot::build(&patterns, &at(9, 0), &locale);
    let second = MenuSnapshot::build(&patterns, &at(9, 0), &locale);
    assert_eq!(first, second);

    // A later clock changes texts, never the order
    let later = MenuSnapshot::build(&patterns, &(at(9, 0) + Duration::minutes(7)), &locale);
    assert_eq!(layout(&first), layout(&later));
}

#[test]
fn test_invalid_entry_stays_eligible() {
    let locale = LocaleInfo::invariant();
    let patterns = sample_patterns();

    MenuSnapshot::build(&patterns, &at(9, 0), &locale);
    assert_eq!(patterns.len(), 3);
    assert_eq!(patterns.get(1).unwrap().pattern, "bogus-pattern-!!");
}

#[test]
fn test_find_by_id() {
    let locale = LocaleInfo::invariant();
    let snapshot = MenuSnapshot::build(&sample_patterns(), &at(9, 30), &locale);

    assert_eq!(snapshot.find("pattern-0").unwrap().text, "2015-04-12");
    // Dropped entries have no menu item
    assert!(snapshot.find("pattern-1").is_none());
    assert!(snapshot.find(EXIT_ID).is_none());
    assert!(snapshot.find("pattern-x").is_none());
}

#[test]
fn test_entry_ids() {
    assert_eq!(entry_id(7), "pattern-7");
    assert_eq!(parse_entry_id("pattern-7"), Some(7));
    assert_eq!(parse_entry_id("exit"), None);
}

#[test]
fn test_empty_set_has_exit_only() {
    let locale = LocaleInfo::invariant();
    let snapshot = MenuSnapshot::build(&PatternSet::default(), &at(9, 0), &locale);
    assert_eq!(layout(&snapshot), vec!["-", "Exit"]);
    assert_eq!(MenuSnapshot::default().slots(), &[MenuSlot::Exit]);
}
