use crate::consts::{
    HALF_DAY_HOURS, MAX_DAY_OF_WEEK, MAX_HOUR, MAX_MONTH, MAX_YEAR, MIN_HOUR, MIN_YEAR,
    MONTHS_LONG, MONTHS_SHORT, SHORT_YEAR_CENTURY, SHORT_YEAR_MAX_DIGITS, WEEKDAYS_LONG,
    WEEKDAYS_SHORT, WEEKDAYS_SHORTEST, YEAR_OFFSET_EPOCH,
};
use crate::prelude::*;
use crate::{DateError, Field};
use std::fmt;
use std::str::FromStr;

const DAY_OF_WEEK_RANGE: &str = "0-6";
const MONTH_RANGE: &str = "0-11";
const HOUR_RANGE: &str = "1-24";
const YEAR_EXPECTED: &str = "a positive integer";
const NUMBER_EXPECTED: &str = "an integer";
const NON_NEGATIVE_EXPECTED: &str = "a non-negative integer";
const YEAR_OFFSET_RANGE: &str = "an offset giving a year in 0-9999";

/// Parses the integer behind a textual field value.
fn parse_field<T: FromStr>(field: Field, s: &str, expected: &'static str) -> Result<T, DateError> {
    s.trim()
        .parse::<T>()
        .map_err(|_| DateError::invalid_field(field, s, expected))
}

/// A weekday index in the range `0..=6`, where 0 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    /// Creates a new `DayOfWeek`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidField` if the value is outside `0..=6`.
    pub fn new(value: i32) -> Result<Self, DateError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_DAY_OF_WEEK)
            .map(Self)
            .ok_or_else(|| DateError::invalid_field(Field::DayOfWeek, value, DAY_OF_WEEK_RANGE))
    }

    /// Returns the zero-based index
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Full English name, e.g. `Sunday`
    pub const fn as_long(self) -> &'static str {
        WEEKDAYS_LONG[self.0 as usize]
    }

    /// Three-letter name, e.g. `Sun`
    pub const fn as_short(self) -> &'static str {
        WEEKDAYS_SHORT[self.0 as usize]
    }

    /// Shortest unambiguous abbreviation, e.g. `Su`, `M`, `Tu`
    pub const fn as_shortest(self) -> &'static str {
        WEEKDAYS_SHORTEST[self.0 as usize]
    }
}

impl TryFrom<i32> for DayOfWeek {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for DayOfWeek {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_field(Field::DayOfWeek, s, DAY_OF_WEEK_RANGE)?)
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    #[allow(clippy::cast_possible_truncation)]
    fn from(weekday: chrono::Weekday) -> Self {
        Self(weekday.num_days_from_sunday() as u8)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

/// A calendar day of the month.
///
/// Not range-checked: values come from an already valid instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{}", _0)]
pub struct DayOfMonth(u32);

impl DayOfMonth {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn as_number(self) -> String {
        self.0.to_string()
    }

    /// Day number padded to two digits, e.g. `09`
    pub fn as_zero_filled_number(self) -> String {
        format!("{:02}", self.0)
    }

    /// Day number followed by its English ordinal suffix, e.g. `21st`
    pub fn with_suffix(self) -> String {
        format!("{}{}", self.0, self.just_suffix())
    }

    /// English ordinal suffix for the day number.
    /// 11, 12 and 13 always take `th`.
    pub const fn just_suffix(self) -> &'static str {
        if matches!(self.0 % 100, 11..=13) {
            return "th";
        }
        match self.0 % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    }
}

impl TryFrom<i32> for DayOfMonth {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DateError::invalid_field(Field::DayOfMonth, value, NON_NEGATIVE_EXPECTED))
    }
}

impl FromStr for DayOfMonth {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(Field::DayOfMonth, s, NUMBER_EXPECTED).map(Self)
    }
}

/// A month index in the range `0..=11`, where 0 is January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Month(u8);

impl Month {
    /// Creates a new `Month` from a zero-based index.
    ///
    /// # Errors
    /// Returns `DateError::InvalidField` if the value is outside `0..=11`.
    pub fn new(value: i32) -> Result<Self, DateError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_MONTH)
            .map(Self)
            .ok_or_else(|| DateError::invalid_field(Field::Month, value, MONTH_RANGE))
    }

    /// Month index read from a valid instant
    pub(crate) const fn from_index0(value: u8) -> Self {
        debug_assert!(value <= MAX_MONTH);
        Self(value)
    }

    /// Returns the zero-based index
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the one-based month number (January is 1)
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    pub const fn as_long(self) -> &'static str {
        MONTHS_LONG[self.0 as usize]
    }

    pub const fn as_short(self) -> &'static str {
        MONTHS_SHORT[self.0 as usize]
    }

    /// One-based month number, e.g. `6` for June
    pub fn as_number(self) -> String {
        self.number().to_string()
    }

    /// One-based month number padded to two digits, e.g. `06`
    pub fn as_zero_filled_number(self) -> String {
        format!("{:02}", self.number())
    }
}

impl TryFrom<i32> for Month {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Month {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_field(Field::Month, s, MONTH_RANGE)?)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

/// An absolute year.
///
/// Built either from an offset counted from 1900 (`from_offset`), or from text
/// where one or two digits name a year in the 2000s (`"16"` is 2016).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// Creates a year from its offset to 1900; `116` is 2016, `-156` is 1744.
    pub const fn from_offset(offset: i32) -> Self {
        Self(YEAR_OFFSET_EPOCH.saturating_add(offset))
    }

    /// Returns the absolute year
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns the offset to 1900
    #[inline]
    pub const fn offset(self) -> i32 {
        self.0 - YEAR_OFFSET_EPOCH
    }

    /// Absolute year, padded to four digits
    pub fn as_long(self) -> String {
        if self.0 < 0 {
            self.0.to_string()
        } else {
            format!("{:04}", self.0)
        }
    }

    /// Last two digits of the year, e.g. `16` for 2016
    pub fn as_short(self) -> String {
        format!("{:02}", self.0.rem_euclid(100))
    }
}

/// Offset to 1900, rejecting years without a four-digit rendering.
impl TryFrom<i32> for Year {
    type Error = DateError;

    fn try_from(offset: i32) -> Result<Self, Self::Error> {
        YEAR_OFFSET_EPOCH
            .checked_add(offset)
            .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
            .map(Self)
            .ok_or_else(|| DateError::invalid_field(Field::Year, offset, YEAR_OFFSET_RANGE))
    }
}

impl FromStr for Year {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i32 = parse_field(Field::Year, s, YEAR_EXPECTED)?;
        if value <= 0 {
            return Err(DateError::invalid_field(Field::Year, s, YEAR_EXPECTED));
        }
        let digits = trimmed.trim_start_matches('+').len();
        if digits <= SHORT_YEAR_MAX_DIGITS {
            Ok(Self(SHORT_YEAR_CENTURY + value))
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An hour of the day, held as a one-based value in `1..=24`.
///
/// The stored value is the hour of day plus one; renderings subtract it
/// again, so midnight is stored as 1 and renders as `00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    /// Creates a new `Hour` from its one-based stored value.
    ///
    /// # Errors
    /// Returns `DateError::InvalidField` if the value is outside `1..=24`.
    pub fn new(value: i32) -> Result<Self, DateError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (MIN_HOUR..=MAX_HOUR).contains(v))
            .map(Self)
            .ok_or_else(|| DateError::invalid_field(Field::Hour, value, HOUR_RANGE))
    }

    /// Creates an `Hour` from a zero-based hour of day (`0..=23`).
    ///
    /// # Errors
    /// Returns `DateError::InvalidField` if the hour is above 23.
    pub fn from_hour_of_day(hour: u32) -> Result<Self, DateError> {
        let stored = i32::try_from(hour)
            .map_err(|_| DateError::invalid_field(Field::Hour, hour, HOUR_RANGE))?;
        Self::new(stored + 1)
    }

    /// Hour of day read from a valid instant
    pub(crate) const fn from_valid_hour_of_day(hour: u8) -> Self {
        debug_assert!(hour < MAX_HOUR);
        Self(hour + 1)
    }

    /// Returns the one-based stored value
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based hour of day
    #[inline]
    pub const fn hour_of_day(self) -> u8 {
        self.0 - 1
    }

    /// 24-hour clock, padded to two digits, e.g. `09`, `21`
    pub fn as_24hr(self) -> String {
        format!("{:02}", self.hour_of_day())
    }

    /// 12-hour clock without padding, e.g. `9` for 21:00.
    /// Midnight renders as `0`.
    pub fn as_12hr(self) -> String {
        let hour = self.hour_of_day();
        if hour > HALF_DAY_HOURS {
            (hour - HALF_DAY_HOURS).to_string()
        } else {
            hour.to_string()
        }
    }

    /// `AM` or `PM`, decided on the stored value
    pub const fn am_pm(self) -> &'static str {
        if self.0 > HALF_DAY_HOURS { "PM" } else { "AM" }
    }
}

impl TryFrom<i32> for Hour {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Hour {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_field(Field::Hour, s, HOUR_RANGE)?)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.hour_of_day())
    }
}

/// A minute of the hour. Not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{:02}", _0)]
pub struct Minute(u32);

impl Minute {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Minute padded to two digits, e.g. `05`
    pub fn as_zero_filled_number(self) -> String {
        format!("{:02}", self.0)
    }
}

impl TryFrom<i32> for Minute {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DateError::invalid_field(Field::Minute, value, NON_NEGATIVE_EXPECTED))
    }
}

impl FromStr for Minute {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(Field::Minute, s, NUMBER_EXPECTED).map(Self)
    }
}
