use crate::display::DateInput;
use crate::types::{DayOfMonth, DayOfWeek, Hour, Minute, Month, Year};
use crate::{CompareDates, DateError, DisplayDate, Separators};

/// Named entry points over the date types, carrying the configured separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateUtils {
    separators: Separators,
}

impl DateUtils {
    pub const fn new(separators: Separators) -> Self {
        Self { separators }
    }

    pub const fn separators(&self) -> Separators {
        self.separators
    }

    /// Wraps `input` for rendering.
    ///
    /// # Errors
    /// Returns `DateError::UnparsableDate` if the input is not a valid date.
    pub fn display<'a>(&self, input: impl Into<DateInput<'a>>) -> Result<DisplayDate, DateError> {
        DisplayDate::with_separators(input, self.separators)
    }

    /// Pairs two inputs for comparison.
    ///
    /// # Errors
    /// Returns `DateError::UnparsableDate` for whichever side fails to parse.
    pub fn compare<'a, 'b>(
        &self,
        first: impl Into<DateInput<'a>>,
        second: impl Into<DateInput<'b>>,
    ) -> Result<CompareDates, DateError> {
        CompareDates::with_separators(first, second, self.separators)
    }

    /// # Errors
    /// Returns `DateError::InvalidField` outside `0..=6`.
    pub fn day_of_week(index: i32) -> Result<DayOfWeek, DateError> {
        DayOfWeek::new(index)
    }

    pub const fn day_of_month(day: u32) -> DayOfMonth {
        DayOfMonth::new(day)
    }

    /// # Errors
    /// Returns `DateError::InvalidField` outside `0..=11`.
    pub fn month(index: i32) -> Result<Month, DateError> {
        Month::new(index)
    }

    /// Year from its offset to 1900.
    pub const fn year(offset: i32) -> Year {
        Year::from_offset(offset)
    }

    /// Hour from a zero-based hour of day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidField` above 23.
    pub fn hour(hour_of_day: u32) -> Result<Hour, DateError> {
        Hour::from_hour_of_day(hour_of_day)
    }

    pub const fn minute(minute: u32) -> Minute {
        Minute::new(minute)
    }
}
