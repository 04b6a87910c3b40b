//! Custom date/time patterns.
//!
//! A pattern is parsed into a list of fields once per render. Runs of the
//! same specifier letter select the field width (`d`, `dd`, `ddd`, `dddd`).
//! Letters that are not specifiers must be quoted or escaped.

#[cfg(test)]
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::error::PatternError;
use crate::locale::{LocaleInfo, ERA};

/// Longest supported fraction of a second (100ns resolution).
pub const MAX_FRACTION_DIGITS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Day { padded: bool },
    DayName { abbreviated: bool },
    /// Fraction of a second; `trim` drops trailing zeros
    Fraction { digits: usize, trim: bool },
    Era,
    Hour12 { padded: bool },
    Hour24 { padded: bool },
    Minute { padded: bool },
    Second { padded: bool },
    Month { padded: bool },
    MonthName { abbreviated: bool },
    AmPm { full: bool },
    /// 1 and 2 render the year mod 100, more render the full year
    Year { digits: usize },
    /// Offset from UTC: 1 = `+h`, 2 = `+hh`, 3 = `+hh:mm`
    Offset { width: usize },
    OffsetKind,
    TimeSeparator,
    DateSeparator,
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    fields: Vec<Field>,
}

impl Pattern {
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        if source.is_empty() {
            return Err(PatternError::Empty);
        }

        let chars: Vec<(usize, char)> = source.char_indices().collect();
        let mut fields = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let (offset, ch) = chars[i];
            match ch {
                '\'' | '"' => {
                    let mut literal = String::new();
                    let mut j = i + 1;
                    loop {
                        let Some(&(_, c)) = chars.get(j) else {
                            return Err(PatternError::UnterminatedQuote { offset });
                        };
                        if c == ch {
                            break;
                        }
                        if c == '\\' {
                            j += 1;
                            let Some(&(_, escaped)) = chars.get(j) else {
                                return Err(PatternError::UnterminatedQuote { offset });
                            };
                            literal.push(escaped);
                        } else {
                            literal.push(c);
                        }
                        j += 1;
                    }
                    push_literal(&mut fields, &literal);
                    i = j + 1;
                },
                '\\' => {
                    let Some(&(_, escaped)) = chars.get(i + 1) else {
                        return Err(PatternError::DanglingEscape);
                    };
                    push_literal(&mut fields, escaped.encode_utf8(&mut [0u8; 4]));
                    i += 2;
                },
                '%' => match chars.get(i + 1) {
                    Some(&(next_offset, next)) if next != '%' => {
                        fields.push(specifier(next, 1, next_offset)?);
                        i += 2;
                    },
                    _ => return Err(PatternError::DanglingPercent),
                },
                ':' | '/' => {
                    fields.push(specifier(ch, 1, offset)?);
                    i += 1;
                },
                c if c.is_ascii_alphabetic() => {
                    let run = chars[i..].iter().take_while(|&&(_, other)| other == c).count();
                    fields.push(specifier(c, run, offset)?);
                    i += run;
                },
                other => {
                    push_literal(&mut fields, other.encode_utf8(&mut [0u8; 4]));
                    i += 1;
                },
            }
        }

        Ok(Self { fields })
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn render(&self, dt: &DateTime<FixedOffset>, locale: &LocaleInfo) -> String {
        let mut out = String::new();

        for field in &self.fields {
            match field {
                Field::Day { padded } => push_number(&mut out, dt.day() as i64, width(*padded)),
                Field::DayName { abbreviated } => {
                    out.push_str(&locale.day_name(dt, *abbreviated))
                },
                Field::Fraction { digits, trim } => {
                    // Leap seconds report nanoseconds >= 1e9
                    let nanos = format!("{:09}", dt.nanosecond() % 1_000_000_000);
                    let mut fraction = &nanos[..*digits];
                    if *trim {
                        fraction = fraction.trim_end_matches('0');
                        if fraction.is_empty() {
                            if out.ends_with('.') {
                                out.pop();
                            }
                            continue;
                        }
                    }
                    out.push_str(fraction);
                },
                Field::Era => out.push_str(ERA),
                Field::Hour12 { padded } => {
                    let (_, hour) = dt.hour12();
                    push_number(&mut out, hour as i64, width(*padded));
                },
                Field::Hour24 { padded } => push_number(&mut out, dt.hour() as i64, width(*padded)),
                Field::Minute { padded } => {
                    push_number(&mut out, dt.minute() as i64, width(*padded))
                },
                Field::Second { padded } => {
                    push_number(&mut out, dt.second() as i64, width(*padded))
                },
                Field::Month { padded } => push_number(&mut out, dt.month() as i64, width(*padded)),
                Field::MonthName { abbreviated } => {
                    out.push_str(&locale.month_name(dt, *abbreviated))
                },
                Field::AmPm { full } => {
                    let designator = locale.am_pm(dt);
                    if *full {
                        out.push_str(&designator);
                    } else if let Some(first) = designator.chars().next() {
                        out.push(first);
                    }
                },
                Field::Year { digits } => {
                    let year = dt.year() as i64;
                    match digits {
                        1 | 2 => push_number(&mut out, year.rem_euclid(100), *digits),
                        n => push_number(&mut out, year, *n),
                    }
                },
                Field::Offset { width } => {
                    push_offset(&mut out, dt.offset().local_minus_utc(), *width)
                },
                Field::OffsetKind => push_offset(&mut out, dt.offset().local_minus_utc(), 3),
                Field::TimeSeparator => out.push(':'),
                Field::DateSeparator => out.push('/'),
                Field::Literal(text) => out.push_str(text),
            }
        }

        out
    }
}

#[cfg(test)]
impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn specifier(ch: char, count: usize, offset: usize) -> Result<Field, PatternError> {
    let field = match ch {
        'd' => match count {
            1 | 2 => Field::Day { padded: count == 2 },
            3 => Field::DayName { abbreviated: true },
            _ => Field::DayName { abbreviated: false },
        },
        'f' | 'F' => {
            if count > MAX_FRACTION_DIGITS {
                return Err(PatternError::FractionTooLong { count });
            }
            Field::Fraction {
                digits: count,
                trim: ch == 'F',
            }
        },
        'g' => Field::Era,
        'h' => Field::Hour12 { padded: count >= 2 },
        'H' => Field::Hour24 { padded: count >= 2 },
        'K' => Field::OffsetKind,
        'm' => Field::Minute { padded: count >= 2 },
        'M' => match count {
            1 | 2 => Field::Month { padded: count == 2 },
            3 => Field::MonthName { abbreviated: true },
            _ => Field::MonthName { abbreviated: false },
        },
        's' => Field::Second { padded: count >= 2 },
        't' => Field::AmPm { full: count >= 2 },
        'y' => Field::Year { digits: count },
        'z' => Field::Offset {
            width: count.min(3),
        },
        ':' => Field::TimeSeparator,
        '/' => Field::DateSeparator,
        _ => return Err(PatternError::UnknownSpecifier { ch, offset }),
    };
    Ok(field)
}

fn push_literal(fields: &mut Vec<Field>, text: &str) {
    if let Some(Field::Literal(last)) = fields.last_mut() {
        last.push_str(text);
    } else {
        fields.push(Field::Literal(text.to_string()));
    }
}

fn width(padded: bool) -> usize {
    if padded {
        2
    } else {
        1
    }
}

fn push_number(out: &mut String, value: i64, width: usize) {
    if value < 0 {
        out.push('-');
    }
    out.push_str(&format!("{:0width$}", value.unsigned_abs(), width = width));
}

fn push_offset(out: &mut String, seconds: i32, width: usize) {
    out.push(if seconds < 0 { '-' } else { '+' });
    let seconds = seconds.unsigned_abs();
    let (hours, minutes) = (seconds / 3600, (seconds % 3600) / 60);
    match width {
        1 => out.push_str(&hours.to_string()),
        2 => out.push_str(&format!("{:02}", hours)),
        _ => out.push_str(&format!("{:02}:{:02}", hours, minutes)),
    }
}
