mod compare;
mod config;
mod consts;
mod display;
mod facade;
mod parse;
mod prelude;
mod types;

pub use compare::{CompareDates, Granularity};
pub use config::Separators;
pub use consts::*;
pub use display::{CalendarFields, DateInput, DisplayDate, Projection};
pub use facade::DateUtils;
pub use types::{DayOfMonth, DayOfWeek, Hour, Minute, Month, Year};

use crate::prelude::*;

/// The calendar field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "day of week")]
    DayOfWeek,
    #[display(fmt = "day of month")]
    DayOfMonth,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
}

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A calendar field was out of range or not a parsable integer.
    #[error("Invalid {field}: {value} (must be {expected})")]
    InvalidField {
        field:    Field,
        value:    String,
        expected: &'static str,
    },

    /// The input does not resolve to a valid instant.
    #[error("Unparsable date: {0}")]
    UnparsableDate(String),

    /// Malformed text passed to `set_time_of_day`.
    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    /// Rendering was requested without a projection.
    #[error("No projection supplied and no default projection configured")]
    MissingProjection,
}

impl DateError {
    pub(crate) fn invalid_field(field: Field, value: impl ToString, expected: &'static str) -> Self {
        Self::InvalidField {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message() {
        let err = DateError::invalid_field(Field::DayOfWeek, 7, "0-6");
        assert_eq!(err.to_string(), "Invalid day of week: 7 (must be 0-6)");
    }

    #[test]
    fn test_unparsable_date_message() {
        let err = DateError::UnparsableDate("Movember".to_owned());
        assert_eq!(err.to_string(), "Unparsable date: Movember");
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::DayOfMonth.to_string(), "day of month");
        assert_eq!(Field::Minute.to_string(), "minute");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DateError>();
    }
}
