//! Turns date text into a single `NaiveDateTime`.
//!
//! Layouts are tried in order: RFC 3339, RFC 2822, numeric (year-first with
//! the configured date separator, or month-first with `/`), then free-form
//! text built around a month name. Missing day defaults to the 1st and
//! missing time to midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::trace;

use crate::consts::{MONTH_FIRST_SEPARATOR, MONTHS_LONG, SHORT_YEAR_CENTURY, WEEKDAYS_LONG};
use crate::{DateError, Separators};

/// Shortest prefix accepted as a month or weekday name (`Oct`, `Sun`)
const MIN_NAME_PREFIX: usize = 3;
/// Largest number read as a day rather than a year in free-form text
const MAX_DAY_NUMBER: u32 = 31;
const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// Parses `input` into an instant.
///
/// # Errors
/// Returns `DateError::UnparsableDate` when no layout matches or the
/// components name an impossible date (e.g. 30 February).
pub(crate) fn parse_instant(input: &str, separators: &Separators) -> Result<NaiveDateTime, DateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateError::UnparsableDate(input.to_owned()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        trace!(input = trimmed, "parsed as RFC 3339");
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        trace!(input = trimmed, "parsed as RFC 2822");
        return Ok(dt.naive_local());
    }

    parse_numeric(trimmed, separators)
        .or_else(|| parse_free_form(trimmed, separators))
        .ok_or_else(|| {
            trace!(input = trimmed, "no date layout matched");
            DateError::UnparsableDate(input.to_owned())
        })
}

/// Hour, minute and optional second of an `H:MM[:SS]` text
pub(crate) type TimeParts = (u32, u32, Option<u32>);

const MIDNIGHT: TimeParts = (0, 0, None);

/// Splits `H:MM[:SS]` into its components.
pub(crate) fn parse_time(text: &str, separator: char) -> Option<TimeParts> {
    let parts: Vec<&str> = text.split(separator).map(str::trim).collect();
    let number = |s: &str| s.parse::<u32>().ok();
    match parts.as_slice() {
        [h, m] => Some((number(h)?, number(m)?, None)),
        [h, m, s] => Some((number(h)?, number(m)?, Some(number(s)?))),
        _ => None,
    }
}

fn build(year: i32, month: u32, day: u32, time: TimeParts) -> Option<NaiveDateTime> {
    let (hour, minute, second) = time;
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second.unwrap_or(0))
}

fn parse_numeric(s: &str, separators: &Separators) -> Option<NaiveDateTime> {
    let (date_part, time_part) = match s.split_once(|c: char| c == 'T' || c.is_whitespace()) {
        Some((date, time)) => (date, Some(time.trim())),
        None => (s, None),
    };
    let time = match time_part {
        Some(t) => parse_time(t, separators.time)?,
        None => MIDNIGHT,
    };

    let number = |p: &str| p.trim().parse::<u32>().ok();

    // A `/` date separator turns `/` into year-first.
    if separators.date != MONTH_FIRST_SEPARATOR && date_part.contains(MONTH_FIRST_SEPARATOR) {
        let parts: Vec<&str> = date_part.split(MONTH_FIRST_SEPARATOR).collect();
        let (month, day, year) = match parts.as_slice() {
            [m, y] => (number(m)?, 1, y.trim().parse::<i32>().ok()?),
            [m, d, y] => (number(m)?, number(d)?, y.trim().parse::<i32>().ok()?),
            _ => return None,
        };
        trace!(input = s, "parsed as month-first numeric date");
        return build(year, month, day, time);
    }

    let parts: Vec<&str> = date_part.split(separators.date).collect();
    let year = parts.first()?.trim().parse::<i32>().ok()?;
    let (month, day) = match parts.as_slice() {
        [_] => (1, 1),
        [_, m] => (number(m)?, 1),
        [_, m, d] => (number(m)?, number(d)?),
        _ => return None,
    };
    trace!(input = s, "parsed as year-first numeric date");
    build(year, month, day, time)
}

/// Matches a (possibly abbreviated) name against a table, case-insensitively.
fn match_name(token: &str, table: &[&str]) -> Option<usize> {
    if token.len() < MIN_NAME_PREFIX {
        return None;
    }
    let lower = token.to_lowercase();
    table
        .iter()
        .position(|name| name.to_lowercase().starts_with(&lower))
}

/// Strips an ordinal suffix from a day such as `9th`.
fn strip_ordinal(token: &str) -> &str {
    ORDINAL_SUFFIXES
        .iter()
        .find_map(|suffix| {
            token
                .strip_suffix(suffix)
                .filter(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
        })
        .unwrap_or(token)
}

fn parse_free_form(s: &str, separators: &Separators) -> Option<NaiveDateTime> {
    let mut month = None;
    let mut day = None;
    let mut year = None;
    let mut time = None;

    let tokens = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|t| t.trim_end_matches('.'))
        .filter(|t| !t.is_empty());

    for token in tokens {
        if let Some(index) = match_name(token, &MONTHS_LONG) {
            if month.replace(u32::try_from(index).ok()? + 1).is_some() {
                return None;
            }
            continue;
        }
        if match_name(token, &WEEKDAYS_LONG).is_some() {
            continue;
        }
        if token.contains(separators.time) {
            if time.replace(parse_time(token, separators.time)?).is_some() {
                return None;
            }
            continue;
        }

        let digits = strip_ordinal(token);
        let value: u32 = digits.parse().ok()?;
        if digits.len() > 2 || value > MAX_DAY_NUMBER {
            if year.replace(i32::try_from(value).ok()?).is_some() {
                return None;
            }
        } else if day.is_none() {
            day = Some(value);
        } else if year.is_none() {
            year = Some(SHORT_YEAR_CENTURY + i32::try_from(value).ok()?);
        } else {
            return None;
        }
    }

    trace!(input = s, "parsed as free-form date");
    build(year?, month?, day.unwrap_or(1), time.unwrap_or(MIDNIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn parse(s: &str) -> NaiveDateTime {
        parse_instant(s, &Separators::default()).unwrap()
    }

    fn ymd_hm(dt: NaiveDateTime) -> (i32, u32, u32, u32, u32) {
        (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
    }

    #[test]
    fn test_parse_iso_full_date() {
        assert_eq!(ymd_hm(parse("2016-10-09")), (2016, 10, 9, 0, 0));
    }

    #[test]
    fn test_parse_unpadded_components() {
        assert_eq!(ymd_hm(parse("2016-05-4")), (2016, 5, 4, 0, 0));
        assert_eq!(ymd_hm(parse("2016-10-1")), (2016, 10, 1, 0, 0));
    }

    #[test]
    fn test_parse_year_month_and_year() {
        assert_eq!(ymd_hm(parse("2016-11")), (2016, 11, 1, 0, 0));
        assert_eq!(ymd_hm(parse("2016")), (2016, 1, 1, 0, 0));
    }

    #[test]
    fn test_parse_date_with_time() {
        assert_eq!(ymd_hm(parse("2016-10-09 14:30")), (2016, 10, 9, 14, 30));
        assert_eq!(ymd_hm(parse("2016-10-09T07:05:59")), (2016, 10, 9, 7, 5));
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_time() {
        assert_eq!(
            ymd_hm(parse("2016-10-09T23:15:00+05:00")),
            (2016, 10, 9, 23, 15)
        );
    }

    #[test]
    fn test_parse_rfc2822() {
        assert_eq!(
            ymd_hm(parse("Sun, 09 Oct 2016 08:00:00 +0000")),
            (2016, 10, 9, 8, 0)
        );
    }

    #[test]
    fn test_parse_month_first() {
        assert_eq!(ymd_hm(parse("10/9/2016")), (2016, 10, 9, 0, 0));
        assert_eq!(ymd_hm(parse("10/2016")), (2016, 10, 1, 0, 0));
    }

    #[test]
    fn test_parse_free_form() {
        assert_eq!(ymd_hm(parse("October, 2016")), (2016, 10, 1, 0, 0));
        assert_eq!(ymd_hm(parse("9 October 2016")), (2016, 10, 9, 0, 0));
        assert_eq!(ymd_hm(parse("October 9th, 2016")), (2016, 10, 9, 0, 0));
        assert_eq!(ymd_hm(parse("sun oct 09 2016 14:30")), (2016, 10, 9, 14, 30));
        assert_eq!(ymd_hm(parse("Sept. 3 2016")), (2016, 9, 3, 0, 0));
    }

    #[test]
    fn test_custom_separators() {
        let seps = Separators::new('.', 'h');
        let dt = parse_instant("2016.10.09 14h30", &seps).unwrap();
        assert_eq!(ymd_hm(dt), (2016, 10, 9, 14, 30));
    }

    #[test]
    fn test_slash_as_configured_date_separator() {
        let seps = Separators::new('/', ':');
        let dt = parse_instant("2016/10/09", &seps).unwrap();
        assert_eq!(ymd_hm(dt), (2016, 10, 9, 0, 0));
    }

    #[test]
    fn test_rejects_garbage() {
        for input in ["", "   ", "Movember", "yearOfTheHorse", "2016-13-01", "2016-02-30", "2016-10-09-01"] {
            let result = parse_instant(input, &Separators::default());
            assert!(
                matches!(result, Err(DateError::UnparsableDate(_))),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_rejects_free_form_without_year() {
        assert!(parse_instant("October 9", &Separators::default()).is_err());
    }
}
