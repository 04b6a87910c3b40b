//! Date/time pattern engine.
//!
//! - `pattern`: custom patterns such as `yyyy-MM-dd`
//! - standard formats: single-letter patterns (`d`, `T`, `o`, ...) that
//!   expand to a locale pattern first
//!
//! Rendering is a pure function of the time, the pattern and the locale.

pub mod pattern;

pub use pattern::{Field, Pattern};

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::PatternError;
use crate::locale::LocaleInfo;

/// Render `dt` with `pattern`.
pub fn format(
    dt: &DateTime<FixedOffset>,
    pattern: &str,
    locale: &LocaleInfo,
) -> Result<String, PatternError> {
    let mut chars = pattern.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(PatternError::Empty),
        (Some(letter), None) => format_standard(dt, letter, locale),
        _ => Ok(Pattern::parse(pattern)?.render(dt, locale)),
    }
}

fn format_standard(
    dt: &DateTime<FixedOffset>,
    letter: char,
    locale: &LocaleInfo,
) -> Result<String, PatternError> {
    let expanded = locale
        .standard_pattern(letter)
        .ok_or(PatternError::UnknownStandardFormat(letter))?;
    let pattern = Pattern::parse(&expanded)?;

    if is_universal(letter) {
        let utc: DateTime<FixedOffset> = dt.with_timezone(&Utc).into();
        Ok(pattern.render(&utc, locale))
    } else {
        Ok(pattern.render(dt, locale))
    }
}

/// Standard formats that render UTC rather than local time.
fn is_universal(letter: char) -> bool {
    matches!(letter, 'r' | 'R' | 'u' | 'U')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    /// Sunday 2015-04-12 09:05:07.1234 at UTC+2
    fn sample() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2015, 4, 12, 9, 5, 7)
            .unwrap()
            .with_nanosecond(123_400_000)
            .unwrap()
    }

    fn render(pattern: &str) -> Result<String, PatternError> {
        format(&sample(), pattern, &LocaleInfo::invariant())
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(render("yyyy-MM-dd").unwrap(), "2015-04-12");
    }

    #[test]
    fn test_times() {
        assert_eq!(render("HH:mm").unwrap(), "09:05");
        assert_eq!(render("H:m:s").unwrap(), "9:5:7");
        assert_eq!(render("hh:mm tt").unwrap(), "09:05 AM");
        assert_eq!(render("h t").unwrap(), "9 A");
    }

    #[test]
    fn test_afternoon_hour12() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2015, 4, 12, 15, 4, 0)
            .unwrap();
        let out = format(&dt, "h:mm tt", &LocaleInfo::invariant()).unwrap();
        assert_eq!(out, "3:04 PM");
    }

    #[test]
    fn test_names() {
        assert_eq!(
            render("dddd, dd MMMM yyyy").unwrap(),
            "Sunday, 12 April 2015"
        );
        assert_eq!(render("ddd d MMM").unwrap(), "Sun 12 Apr");
        assert_eq!(render("gg yyyy").unwrap(), "A.D. 2015");
    }

    #[test]
    fn test_years() {
        assert_eq!(render("%y").unwrap(), "15");
        assert_eq!(render("yy").unwrap(), "15");
        assert_eq!(render("yyy").unwrap(), "2015");
        assert_eq!(render("yyyyy").unwrap(), "02015");

        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2005, 1, 2, 0, 0, 0)
            .unwrap();
        let locale = LocaleInfo::invariant();
        assert_eq!(format(&dt, "%y", &locale).unwrap(), "5");
        assert_eq!(format(&dt, "yy", &locale).unwrap(), "05");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(render("ss.fff").unwrap(), "07.123");
        assert_eq!(render("ss.fffffff").unwrap(), "07.1234000");
        assert_eq!(render("ss.FFFFFFF").unwrap(), "07.1234");

        let whole = sample().with_nanosecond(0).unwrap();
        let locale = LocaleInfo::invariant();
        assert_eq!(format(&whole, "ss.FFF", &locale).unwrap(), "07");
        assert_eq!(format(&whole, "ss.fff", &locale).unwrap(), "07.000");
    }

    #[test]
    fn test_offsets() {
        assert_eq!(render("%z").unwrap(), "+2");
        assert_eq!(render("zz").unwrap(), "+02");
        assert_eq!(render("zzz").unwrap(), "+02:00");
        assert_eq!(render("%K").unwrap(), "+02:00");
    }

    #[test]
    fn test_literals() {
        assert_eq!(render("'Year:' yyyy").unwrap(), "Year: 2015");
        assert_eq!(render("\"at\" HH").unwrap(), "at 09");
        assert_eq!(render("yyyy年MM月dd日").unwrap(), "2015年04月12日");
        assert_eq!(render("dd/MM").unwrap(), "12/04");
    }

    #[test]
    fn test_standard_formats() {
        assert_eq!(render("d").unwrap(), "04/12/2015");
        assert_eq!(render("D").unwrap(), "Sunday, 12 April 2015");
        assert_eq!(render("t").unwrap(), "09:05");
        assert_eq!(render("T").unwrap(), "09:05:07");
        assert_eq!(render("s").unwrap(), "2015-04-12T09:05:07");
        assert_eq!(render("M").unwrap(), "April 12");
        assert_eq!(render("y").unwrap(), "2015 April");
        assert_eq!(render("o").unwrap(), "2015-04-12T09:05:07.1234000+02:00");
    }

    #[test]
    fn test_universal_formats_use_utc() {
        assert_eq!(render("u").unwrap(), "2015-04-12 07:05:07Z");
        assert_eq!(render("r").unwrap(), "Sun, 12 Apr 2015 07:05:07 GMT");
        assert_eq!(render("U").unwrap(), "Sunday, 12 April 2015 07:05:07");
    }

    #[test]
    fn test_invalid_patterns() {
        assert_eq!(render(""), Err(PatternError::Empty));
        assert_eq!(render("q"), Err(PatternError::UnknownStandardFormat('q')));
        assert_eq!(render("%"), Err(PatternError::UnknownStandardFormat('%')));
        assert!(render("bogus-pattern-!!").is_err());
    }

    #[test]
    fn test_format_is_deterministic() {
        let locale = LocaleInfo::invariant();
        for pattern in locale.all_patterns() {
            let first = format(&sample(), &pattern, &locale);
            let second = format(&sample(), &pattern, &locale);
            assert_eq!(first, second, "pattern {}", pattern);
            assert!(first.is_ok(), "pattern {} failed: {:?}", pattern, first);
        }
    }
}
