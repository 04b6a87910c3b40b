//! Host locale data.
//!
//! Supplies the localized names used while rendering (months, weekdays,
//! AM/PM) and the default pattern list shown when no patterns are passed on
//! the command line. Names come from chrono's locale tables. The locale's own
//! `%x`/`%X` formats are converted into pattern syntax and listed ahead of
//! the invariant patterns.

use chrono::format::{Fixed, Item, Numeric, Pad, StrftimeItems};
use chrono::{DateTime, FixedOffset, Locale};

/// Era designator for the Gregorian calendar.
pub const ERA: &str = "A.D.";

const INVARIANT_SHORT_DATES: &[&str] = &["MM/dd/yyyy", "yyyy-MM-dd"];
const INVARIANT_LONG_DATES: &[&str] = &["dddd, dd MMMM yyyy"];
const INVARIANT_SHORT_TIMES: &[&str] = &["HH:mm", "hh:mm tt", "H:mm", "h:mm tt"];
const INVARIANT_LONG_TIMES: &[&str] = &["HH:mm:ss"];

const MONTH_DAY: &str = "MMMM dd";
const YEAR_MONTH: &str = "yyyy MMMM";
const RFC1123: &str = "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'";
const SORTABLE: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss";
const UNIVERSAL_SORTABLE: &str = "yyyy'-'MM'-'dd HH':'mm':'ss'Z'";
const ROUND_TRIP: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffffK";

/// Standard format letters in the order their patterns are listed.
const STANDARD_ORDER: &[char] = &[
    'd', 'D', 'f', 'F', 'g', 'G', 'm', 'o', 'r', 's', 't', 'T', 'u', 'U', 'y',
];

/// Locale name reported by the host, if any.
pub fn host_locale_name() -> Option<String> {
    platform_locale_name().and_then(|raw| normalize_locale_name(&raw))
}

#[cfg(windows)]
fn platform_locale_name() -> Option<String> {
    use windows::Win32::Globalization::GetUserDefaultLocaleName;

    // LOCALE_NAME_MAX_LENGTH
    let mut buf = [0u16; 85];
    // SAFETY: the buffer is writable for its full length
    let len = unsafe { GetUserDefaultLocaleName(&mut buf) };
    if len <= 1 {
        return None;
    }
    // len includes the terminating null
    Some(String::from_utf16_lossy(&buf[..len as usize - 1]))
}

#[cfg(not(windows))]
fn platform_locale_name() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

/// Strip encoding/modifier suffixes and turn `en-US` into `en_US`.
///
/// Returns `None` for the C/POSIX locale.
pub fn normalize_locale_name(raw: &str) -> Option<String> {
    let base = raw.split(|c| c == '.' || c == '@').next()?.trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('-', "_"))
}

/// Names and patterns for one locale.
#[derive(Debug, Clone)]
pub struct LocaleInfo {
    name: Option<String>,
    locale: Locale,
    short_dates: Vec<String>,
    long_dates: Vec<String>,
    short_times: Vec<String>,
    long_times: Vec<String>,
}

impl LocaleInfo {
    /// Resolve a locale by name. Unknown names fall back to the invariant data.
    pub fn new(name: Option<&str>) -> Self {
        let resolved = name.and_then(|n| Locale::try_from(n).ok().map(|l| (n.to_string(), l)));

        let mut info = Self {
            name: None,
            locale: Locale::POSIX,
            short_dates: owned(INVARIANT_SHORT_DATES),
            long_dates: owned(INVARIANT_LONG_DATES),
            short_times: owned(INVARIANT_SHORT_TIMES),
            long_times: owned(INVARIANT_LONG_TIMES),
        };

        if let Some((name, locale)) = resolved {
            if let Some(pattern) = pattern_from_strftime("%x", locale) {
                info.short_dates.insert(0, pattern);
            }
            if let Some(pattern) = pattern_from_strftime("%X", locale) {
                info.long_times.insert(0, pattern);
            }
            info.name = Some(name);
            info.locale = locale;
        }

        info
    }

    /// Locale of the current user session.
    pub fn host() -> Self {
        Self::new(host_locale_name().as_deref())
    }

    pub fn invariant() -> Self {
        Self::new(None)
    }

    /// Locale name, or `POSIX` when running on invariant data.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("POSIX")
    }

    pub fn month_name(&self, dt: &DateTime<FixedOffset>, abbreviated: bool) -> String {
        let spec = if abbreviated { "%b" } else { "%B" };
        dt.format_localized(spec, self.locale).to_string()
    }

    pub fn day_name(&self, dt: &DateTime<FixedOffset>, abbreviated: bool) -> String {
        let spec = if abbreviated { "%a" } else { "%A" };
        dt.format_localized(spec, self.locale).to_string()
    }

    /// AM/PM designator. Empty for locales that use a 24-hour clock only.
    pub fn am_pm(&self, dt: &DateTime<FixedOffset>) -> String {
        dt.format_localized("%p", self.locale).to_string()
    }

    /// Main pattern behind a one-letter standard format.
    pub fn standard_pattern(&self, letter: char) -> Option<String> {
        self.standard_group(letter)?.into_iter().next()
    }

    /// Every pattern the locale knows, grouped by standard format letter.
    pub fn all_patterns(&self) -> Vec<String> {
        STANDARD_ORDER
            .iter()
            .filter_map(|&letter| self.standard_group(letter))
            .flatten()
            .collect()
    }

    fn standard_group(&self, letter: char) -> Option<Vec<String>> {
        let group = match letter {
            'd' => self.short_dates.clone(),
            'D' => self.long_dates.clone(),
            'f' => combine(&self.long_dates, &self.short_times),
            'F' | 'U' => combine(&self.long_dates, &self.long_times),
            'g' => combine(&self.short_dates, &self.short_times),
            'G' => combine(&self.short_dates, &self.long_times),
            'm' | 'M' => vec![MONTH_DAY.to_string()],
            'o' | 'O' => vec![ROUND_TRIP.to_string()],
            'r' | 'R' => vec![RFC1123.to_string()],
            's' => vec![SORTABLE.to_string()],
            't' => self.short_times.clone(),
            'T' => self.long_times.clone(),
            'u' => vec![UNIVERSAL_SORTABLE.to_string()],
            'y' | 'Y' => vec![YEAR_MONTH.to_string()],
            _ => return None,
        };
        Some(group)
    }
}

impl Default for LocaleInfo {
    fn default() -> Self {
        Self::invariant()
    }
}

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

fn combine(dates: &[String], times: &[String]) -> Vec<String> {
    dates
        .iter()
        .flat_map(|date| times.iter().map(move |time| format!("{} {}", date, time)))
        .collect()
}

/// Convert a strftime specification into pattern syntax.
///
/// Returns `None` when the locale format uses something with no pattern
/// equivalent (centuries, week numbers, ...).
pub fn pattern_from_strftime(spec: &str, locale: Locale) -> Option<String> {
    let mut out = String::new();
    for item in StrftimeItems::new_with_locale(spec, locale) {
        match item {
            Item::Literal(text) | Item::Space(text) => push_literal(&mut out, text),
            Item::OwnedLiteral(text) | Item::OwnedSpace(text) => push_literal(&mut out, &text),
            Item::Numeric(numeric, pad) => out.push_str(numeric_specifier(&numeric, &pad)?),
            Item::Fixed(fixed) => out.push_str(fixed_specifier(&fixed)?),
            _ => return None,
        }
    }
    (!out.is_empty()).then_some(out)
}

fn push_literal(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() || matches!(ch, '\'' | '"' | '\\' | '%') {
            out.push('\\');
        }
        out.push(ch);
    }
}

fn numeric_specifier(numeric: &Numeric, pad: &Pad) -> Option<&'static str> {
    let zero = matches!(pad, Pad::Zero);
    let spec = match numeric {
        Numeric::Year => "yyyy",
        Numeric::YearMod100 => "yy",
        Numeric::Month if zero => "MM",
        Numeric::Month => "M",
        Numeric::Day if zero => "dd",
        Numeric::Day => "d",
        Numeric::Hour if zero => "HH",
        Numeric::Hour => "H",
        Numeric::Hour12 if zero => "hh",
        Numeric::Hour12 => "h",
        Numeric::Minute => "mm",
        Numeric::Second => "ss",
        _ => return None,
    };
    Some(spec)
}

fn fixed_specifier(fixed: &Fixed) -> Option<&'static str> {
    let spec = match fixed {
        Fixed::ShortMonthName => "MMM",
        Fixed::LongMonthName => "MMMM",
        Fixed::ShortWeekdayName => "ddd",
        Fixed::LongWeekdayName => "dddd",
        Fixed::LowerAmPm | Fixed::UpperAmPm => "tt",
        Fixed::TimezoneOffsetColon => "zzz",
        _ => return None,
    };
    Some(spec)
}
