use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DATE_SEPARATOR, DEFAULT_TIME_SEPARATOR};

/// Separators used when reading numeric date and time text.
///
/// Loaded by the host application from its own configuration; keys that are
/// missing keep their defaults (`-` and `:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Separators {
    /// Between year, month and day, e.g. `2016-10-09`
    pub date: char,
    /// Between hour and minute, e.g. `14:30`
    pub time: char,
}

impl Separators {
    pub const fn new(date: char, time: char) -> Self {
        Self { date, time }
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_SEPARATOR, DEFAULT_TIME_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separators() {
        let seps = Separators::default();
        assert_eq!(seps.date, '-');
        assert_eq!(seps.time, ':');
    }

    #[test]
    fn test_deserialize_partial() {
        let seps: Separators = serde_json::from_str(r#"{"time":"."}"#).unwrap();
        assert_eq!(seps, Separators::new('-', '.'));
    }

    #[test]
    fn test_deserialize_empty_keeps_defaults() {
        let seps: Separators = serde_json::from_str("{}").unwrap();
        assert_eq!(seps, Separators::default());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Separators::new('/', 'h')).unwrap();
        assert_eq!(json, r#"{"date":"/","time":"h"}"#);
    }
}
