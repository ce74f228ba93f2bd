use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use tracing::debug;

use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::parse::{parse_instant, parse_time};
use crate::types::{DayOfMonth, DayOfWeek, Hour, Minute, Month, Year};
use crate::{DateError, Granularity, Separators};

/// A caller-supplied function turning calendar fields into an output value.
pub type Projection<R> = Arc<dyn Fn(&CalendarFields) -> R + Send + Sync>;

/// The six calendar fields of one instant, in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    pub day_of_week:  DayOfWeek,
    pub day_of_month: DayOfMonth,
    pub month:        Month,
    pub year:         Year,
    pub hour:         Hour,
    pub minute:       Minute,
}

impl CalendarFields {
    /// Splits an instant into its calendar fields (local wall time).
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_instant(instant: &NaiveDateTime) -> Self {
        Self {
            day_of_week:  DayOfWeek::from(instant.weekday()),
            day_of_month: DayOfMonth::new(instant.day()),
            month:        Month::from_index0(instant.month0() as u8),
            year:         Year::from_offset(instant.year() - crate::YEAR_OFFSET_EPOCH),
            hour:         Hour::from_valid_hour_of_day(instant.hour() as u8),
            minute:       Minute::new(instant.minute()),
        }
    }
}

/// Anything a `DisplayDate` can be built from: date text or an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Text(&'a str),
    Instant(NaiveDateTime),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(instant: NaiveDateTime) -> Self {
        Self::Instant(instant)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        Self::Instant(date.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::Instant(instant.naive_local())
    }
}

impl<R> From<&DisplayDate<R>> for DateInput<'_> {
    fn from(date: &DisplayDate<R>) -> Self {
        Self::Instant(date.instant)
    }
}

/// One instant plus an optional default projection.
///
/// Fields are recomputed from the instant on every `decompose`/`render`, so
/// they always reflect the latest `set_time_of_day`.
pub struct DisplayDate<R = String> {
    instant:    NaiveDateTime,
    separators: Separators,
    projection: Option<Projection<R>>,
}

impl DisplayDate {
    /// Parses `input` with the default separators.
    ///
    /// # Errors
    /// Returns `DateError::UnparsableDate` if the input is not a valid date.
    pub fn new<'a>(input: impl Into<DateInput<'a>>) -> Result<Self, DateError> {
        Self::with_separators(input, Separators::default())
    }

    /// Parses `input`, reading numeric layouts with the given separators.
    ///
    /// Only years `0..=9999` are accepted, so every year renders as four digits.
    ///
    /// # Errors
    /// Returns `DateError::UnparsableDate` if the input is not a valid date or
    /// its year is outside `0..=9999`.
    pub fn with_separators<'a>(
        input: impl Into<DateInput<'a>>,
        separators: Separators,
    ) -> Result<Self, DateError> {
        let instant = match input.into() {
            DateInput::Text(text) => parse_instant(text, &separators)?,
            DateInput::Instant(instant) => instant,
        };
        if !(MIN_YEAR..=MAX_YEAR).contains(&instant.year()) {
            debug!(%instant, "year outside 0-9999 rejected");
            return Err(DateError::UnparsableDate(instant.to_string()));
        }
        Ok(Self {
            instant,
            separators,
            projection: None,
        })
    }

    /// Parses `input` and renders it once through `projection`.
    ///
    /// # Errors
    /// Returns `DateError::UnparsableDate` if the input is not a valid date.
    pub fn format<'a, F, T>(input: impl Into<DateInput<'a>>, projection: F) -> Result<T, DateError>
    where
        F: FnOnce(&CalendarFields) -> T,
    {
        Ok(Self::new(input)?.render(projection))
    }
}

impl<R> DisplayDate<R> {
    /// Replaces the default projection used by `get`.
    pub fn with_projection<T, F>(self, projection: F) -> DisplayDate<T>
    where
        F: Fn(&CalendarFields) -> T + Send + Sync + 'static,
    {
        DisplayDate {
            instant:    self.instant,
            separators: self.separators,
            projection: Some(Arc::new(projection)),
        }
    }

    #[inline]
    pub const fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    #[inline]
    pub const fn separators(&self) -> Separators {
        self.separators
    }

    /// Fresh calendar fields for the current instant.
    pub fn decompose(&self) -> CalendarFields {
        CalendarFields::from_instant(&self.instant)
    }

    /// Hands the calendar fields to `projection` and returns its result unchanged.
    pub fn render<F, T>(&self, projection: F) -> T
    where
        F: FnOnce(&CalendarFields) -> T,
    {
        projection(&self.decompose())
    }

    /// Renders through the default projection.
    ///
    /// # Errors
    /// Returns `DateError::MissingProjection` if none was configured.
    pub fn get(&self) -> Result<R, DateError> {
        let projection = self
            .projection
            .as_ref()
            .ok_or(DateError::MissingProjection)?;
        Ok(self.render(|fields| projection(fields)))
    }

    /// Sets the time of day from `H<sep>MM` text, using the configured time separator.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTimeOfDay` if the text is malformed or out of range.
    pub fn set_time_of_day(&mut self, text: &str) -> Result<(), DateError> {
        self.set_time_of_day_with(text, self.separators.time)
    }

    /// Sets the time of day from `H<sep>MM[<sep>SS]` text split on `separator`.
    ///
    /// The hour goes through `Hour` (stored one-based) before it reaches the
    /// instant, so the rendered 24-hour value equals the hour given here.
    /// Given seconds replace the old seconds and sub-second part; without them
    /// both are kept. On error the instant is not modified.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTimeOfDay` if the text is malformed or out of range.
    pub fn set_time_of_day_with(&mut self, text: &str, separator: char) -> Result<(), DateError> {
        let invalid = || DateError::InvalidTimeOfDay(text.to_owned());

        let (hour, minute, second) = parse_time(text, separator).ok_or_else(invalid)?;
        let hour = Hour::from_hour_of_day(hour).map_err(|_| invalid())?;
        let (second, nano) = match second {
            Some(second) => (second, 0),
            None => (self.instant.second(), self.instant.nanosecond()),
        };
        let time = NaiveTime::from_hms_nano_opt(u32::from(hour.hour_of_day()), minute, second, nano)
            .ok_or_else(invalid)?;

        self.instant = self.instant.date().and_time(time);
        debug!(instant = %self.instant, "time of day set");
        Ok(())
    }

    /// Orders two dates by year, then month.
    pub fn compare_by_month<S>(&self, other: &DisplayDate<S>) -> Ordering {
        let project = |fields: &CalendarFields| Granularity::Month.project(fields);
        self.render(project).cmp(&other.render(project))
    }
}

impl<R> Clone for DisplayDate<R> {
    fn clone(&self) -> Self {
        Self {
            instant:    self.instant,
            separators: self.separators,
            projection: self.projection.clone(),
        }
    }
}

impl<R> fmt::Debug for DisplayDate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayDate")
            .field("instant", &self.instant)
            .field("separators", &self.separators)
            .field("has_projection", &self.projection.is_some())
            .finish()
    }
}
