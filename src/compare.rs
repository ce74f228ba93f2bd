use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::display::{CalendarFields, DateInput, DisplayDate, Projection};
use crate::prelude::*;
use crate::{DateError, Separators};

/// Coarseness at which two dates are compared.
///
/// Each granularity has a canonical text projection: fixed-width, zero-padded
/// and most-significant field first, so comparing the strings orders the
/// dates chronologically (for years `0..=9999`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Granularity {
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl Granularity {
    /// Renders the fields at this granularity.
    ///
    /// | Granularity | Example            |
    /// |-------------|--------------------|
    /// | `Year`      | `2016`             |
    /// | `Month`     | `201610`           |
    /// | `Day`       | `201610-09`        |
    /// | `Minute`    | `201610-09 14:30`  |
    pub fn project(self, fields: &CalendarFields) -> String {
        match self {
            Self::Year => fields.year.as_long(),
            Self::Month => format!(
                "{}{}",
                fields.year.as_long(),
                fields.month.as_zero_filled_number()
            ),
            Self::Day => format!(
                "{}-{}",
                Self::Month.project(fields),
                fields.day_of_month.as_zero_filled_number()
            ),
            Self::Minute => format!(
                "{} {}:{}",
                Self::Day.project(fields),
                fields.hour.as_24hr(),
                fields.minute.as_zero_filled_number()
            ),
        }
    }
}

/// Two dates plus an optional default projection to compare them by.
pub struct CompareDates<R = String> {
    first:      DisplayDate,
    second:     DisplayDate,
    projection: Option<Projection<R>>,
}

impl CompareDates {
    /// Parses both inputs with the default separators.
    ///
    /// # Errors
    /// Returns `DateError::UnparsableDate` for whichever side fails to parse.
    pub fn new<'a, 'b>(
        first: impl Into<DateInput<'a>>,
        second: impl Into<DateInput<'b>>,
    ) -> Result<Self, DateError> {
        Self::with_separators(first, second, Separators::default())
    }

    /// Parses both inputs with the given separators.
    ///
    /// # Errors
    /// Returns `DateError::UnparsableDate` for whichever side fails to parse.
    pub fn with_separators<'a, 'b>(
        first: impl Into<DateInput<'a>>,
        second: impl Into<DateInput<'b>>,
        separators: Separators,
    ) -> Result<Self, DateError> {
        Ok(Self {
            first:      DisplayDate::with_separators(first, separators)?,
            second:     DisplayDate::with_separators(second, separators)?,
            projection: None,
        })
    }
}

impl<R> CompareDates<R> {
    /// Replaces the default projection used by `by_default`.
    pub fn with_projection<T, F>(self, projection: F) -> CompareDates<T>
    where
        F: Fn(&CalendarFields) -> T + Send + Sync + 'static,
        T: Ord,
    {
        CompareDates {
            first:      self.first,
            second:     self.second,
            projection: Some(Arc::new(projection)),
        }
    }

    pub const fn first(&self) -> &DisplayDate {
        &self.first
    }

    pub const fn second(&self) -> &DisplayDate {
        &self.second
    }

    /// Projects both dates and orders the results.
    pub fn by<F, T>(&self, projection: F) -> Ordering
    where
        F: Fn(&CalendarFields) -> T,
        T: Ord,
    {
        let first = self.first.render(&projection);
        let second = self.second.render(&projection);
        first.cmp(&second)
    }

    pub fn by_granularity(&self, granularity: Granularity) -> Ordering {
        self.by(|fields| granularity.project(fields))
    }

    pub fn by_minute(&self) -> Ordering {
        self.by_granularity(Granularity::Minute)
    }

    pub fn by_day(&self) -> Ordering {
        self.by_granularity(Granularity::Day)
    }

    pub fn by_month(&self) -> Ordering {
        self.by_granularity(Granularity::Month)
    }

    pub fn by_year(&self) -> Ordering {
        self.by_granularity(Granularity::Year)
    }
}

impl<R: Ord> CompareDates<R> {
    /// Compares through the default projection, or the raw instants when
    /// there is none.
    pub fn by_default(&self) -> Ordering {
        match &self.projection {
            Some(projection) => self.by(|fields| projection(fields)),
            None => self.first.instant().cmp(&self.second.instant()),
        }
    }
}

impl<R> fmt::Debug for CompareDates<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareDates")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("has_projection", &self.projection.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    fn compare(a: &str, b: &str) -> CompareDates {
        CompareDates::new(a, b).unwrap()
    }

    #[test]
    fn test_by_month() {
        assert_eq!(compare("2016-10", "2016-11").by_month(), Ordering::Less);
        assert_eq!(compare("2016-10-1", "2016-10-31").by_month(), Ordering::Equal);
        assert_eq!(compare("2017-01", "2016-12").by_month(), Ordering::Greater);
    }

    #[test]
    fn test_by_year() {
        assert_eq!(compare("2016-01-01", "2016-12-31").by_year(), Ordering::Equal);
        assert_eq!(compare("2015-12-31", "2016-01-01").by_year(), Ordering::Less);
    }

    #[test]
    fn test_by_day() {
        assert_eq!(compare("2016-10-09 08:00", "2016-10-09 23:59").by_day(), Ordering::Equal);
        assert_eq!(compare("2016-10-10", "2016-10-09").by_day(), Ordering::Greater);
        assert_eq!(compare("2016-09-30", "2016-10-01").by_day(), Ordering::Less);
    }

    #[test]
    fn test_by_minute() {
        assert_eq!(
            compare("2016-10-09 14:30:05", "2016-10-09 14:30:59").by_minute(),
            Ordering::Equal
        );
        assert_eq!(compare("2016-10-09 09:59", "2016-10-09 10:00").by_minute(), Ordering::Less);
    }

    #[test]
    fn test_mixed_input_layouts() {
        assert_eq!(compare("October, 2016", "2016-10-31").by_month(), Ordering::Equal);
        assert_eq!(compare("9 October 2016", "2016-10-09").by_day(), Ordering::Equal);
    }

    #[test]
    fn test_by_custom_projection() {
        let dates = compare("2016-10-09", "2017-03-01");
        // Month-of-year only: October sorts after March.
        assert_eq!(dates.by(|f| f.month.get()), Ordering::Greater);
        assert_eq!(dates.by(|f| f.minute.get()), Ordering::Equal);
    }

    #[test]
    fn test_by_default_without_projection_uses_instants() {
        assert_eq!(compare("2016-10-09 10:00", "2016-10-09 10:01").by_default(), Ordering::Less);
        assert_eq!(compare("2016-10-09", "2016-10-09").by_default(), Ordering::Equal);
    }

    #[test]
    fn test_by_default_with_projection() {
        let dates = compare("2016-10-09", "2016-10-31").with_projection(|f| Granularity::Month.project(f));
        assert_eq!(dates.by_default(), Ordering::Equal);
        assert_eq!(dates.by_day(), Ordering::Less);
    }

    #[test]
    fn test_from_display_dates() {
        let first = DisplayDate::new("2016-10-09").unwrap();
        let second = DisplayDate::new("2016-11-09").unwrap();
        let dates = CompareDates::new(&first, &second).unwrap();
        assert_eq!(dates.by_month(), Ordering::Less);
        assert_eq!(dates.first().instant(), first.instant());
    }

    #[test]
    fn test_parse_failure_per_side() {
        assert!(matches!(
            CompareDates::new("2016-10-09", "Movember"),
            Err(DateError::UnparsableDate(s)) if s == "Movember"
        ));
        assert!(matches!(
            CompareDates::new("Movember", "2016-10-09"),
            Err(DateError::UnparsableDate(_))
        ));
    }

    #[test]
    fn test_years_below_one_thousand_order_chronologically() {
        let dates = compare("0999-12-31", "1000-01-01");
        assert_eq!(dates.by_year(), Ordering::Less);
        assert_eq!(dates.by_month(), Ordering::Less);
        assert_eq!(dates.by_day(), Ordering::Less);
        assert_eq!(dates.by_minute(), Ordering::Less);
        assert_eq!(dates.by_default(), Ordering::Less);

        let ymd = |y| NaiveDate::from_ymd_opt(y, 3, 15).unwrap();
        let dates = CompareDates::new(ymd(5), ymd(44)).unwrap();
        assert_eq!(dates.by_year(), Ordering::Less);
        assert_eq!(dates.by_year(), dates.by_default());
    }

    #[test]
    fn test_years_without_four_digits_rejected() {
        assert!(matches!(
            CompareDates::new("9999-12-31", "10000-01-01"),
            Err(DateError::UnparsableDate(_))
        ));
        let before_zero = |y| NaiveDate::from_ymd_opt(y, 3, 15).unwrap();
        assert!(CompareDates::new(before_zero(-44), before_zero(-4)).is_err());
        assert!(CompareDates::new("9999-12-31", "0000-01-01").is_ok());
    }

    #[test]
    fn test_canonical_projections() {
        let fields = DisplayDate::new("2016-10-09 14:30").unwrap().decompose();
        assert_eq!(Granularity::Year.project(&fields), "2016");
        assert_eq!(Granularity::Month.project(&fields), "201610");
        assert_eq!(Granularity::Day.project(&fields), "201610-09");
        assert_eq!(Granularity::Minute.project(&fields), "201610-09 14:30");
    }

    /// Chronological bucket at each granularity, as a tuple.
    fn bucket(dt: NaiveDateTime, granularity: Granularity) -> (i32, u32, u32, u32, u32) {
        use chrono::{Datelike, Timelike};
        match granularity {
            Granularity::Year => (dt.year(), 0, 0, 0, 0),
            Granularity::Month => (dt.year(), dt.month(), 0, 0, 0),
            Granularity::Day => (dt.year(), dt.month(), dt.day(), 0, 0),
            Granularity::Minute => (dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute()),
        }
    }

    fn instant(minutes: i64) -> NaiveDateTime {
        let base = NaiveDate::from_ymd_opt(0, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        base + Duration::minutes(minutes)
    }

    // 0000-01-01 .. roughly 9900-01-01, in minutes
    const SPAN: i64 = 9900 * 365 * 24 * 60;

    proptest! {
        #[test]
        fn granular_text_order_matches_chronology(
            a in 0..SPAN,
            b in 0..SPAN,
            g in prop_oneof![
                Just(Granularity::Minute),
                Just(Granularity::Day),
                Just(Granularity::Month),
                Just(Granularity::Year),
            ],
        ) {
            let (first, second) = (instant(a), instant(b));
            let dates = CompareDates::new(first, second).unwrap();
            prop_assert_eq!(
                dates.by_granularity(g),
                bucket(first, g).cmp(&bucket(second, g))
            );
        }

        #[test]
        fn nearby_instants_order_matches_chronology(a in 0..SPAN, delta in -2000i64..2000) {
            let (first, second) = (instant(a), instant((a + delta).max(0)));
            let dates = CompareDates::new(first, second).unwrap();
            prop_assert_eq!(
                dates.by_minute(),
                bucket(first, Granularity::Minute).cmp(&bucket(second, Granularity::Minute))
            );
            prop_assert_eq!(dates.by_default(), first.cmp(&second));
        }
    }
}
