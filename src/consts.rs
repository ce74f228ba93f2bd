/// Weekday names, indexed from Sunday (0)
pub const WEEKDAYS_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
/// Three-letter weekday names, indexed from Sunday (0)
pub const WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
/// Shortest unambiguous weekday abbreviations, indexed from Sunday (0)
pub const WEEKDAYS_SHORTEST: [&str; 7] = ["Su", "M", "Tu", "W", "Th", "F", "Sa"];

/// Month names, indexed from January (0)
pub const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
/// Three-letter month names, indexed from January (0)
pub const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Highest zero-indexed weekday (Saturday)
pub const MAX_DAY_OF_WEEK: u8 = 6;
/// Highest zero-indexed month (December)
pub const MAX_MONTH: u8 = 11;
/// Highest internal (1-based) hour value
pub const MAX_HOUR: u8 = 24;
/// Lowest internal (1-based) hour value
pub const MIN_HOUR: u8 = 1;
/// Hours in half a day, used for 12-hour rendering
pub const HALF_DAY_HOURS: u8 = 12;

/// Earliest year with a four-digit rendering
pub const MIN_YEAR: i32 = 0;
/// Latest year with a four-digit rendering
pub const MAX_YEAR: i32 = 9999;

/// Year that a numeric year offset counts from
pub const YEAR_OFFSET_EPOCH: i32 = 1900;
/// Century that one- and two-digit year strings are placed in
pub const SHORT_YEAR_CENTURY: i32 = 2000;
/// Longest year string treated as a short (two-digit) year
pub(crate) const SHORT_YEAR_MAX_DIGITS: usize = 2;

/// Default separator between numeric date components
pub const DEFAULT_DATE_SEPARATOR: char = '-';
/// Default separator between hour and minute
pub const DEFAULT_TIME_SEPARATOR: char = ':';
/// Month-first numeric format separator (`M/D/YYYY`)
pub const MONTH_FIRST_SEPARATOR: char = '/';
