//! Calendar month representation
//!
//! A `Month` is a (year, month) pair ordered chronologically. Month stepping
//! is explicit calendar arithmetic (December rolls over into January of the
//! following year) so the behavior is deterministic and portable. On the
//! wire a month is the canonical day-start instant of its first day,
//! `YYYY-MM-01T00:00:00.000Z`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A calendar month (UTC, date-only precision)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    /// Calendar year
    pub year: i32,
    /// Month of year (1-12)
    pub month: u32,
}

impl Month {
    /// Create a month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    /// Get the month containing the given date (normalizes the day to the 1st)
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the first day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// Get the next calendar month, carrying into the next year after December
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous calendar month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Format as the canonical day-start instant (`YYYY-MM-01T00:00:00.000Z`)
    pub fn to_timestamp(&self) -> String {
        format!("{:04}-{:02}-01T00:00:00.000Z", self.year, self.month)
    }

    /// Parse a month from an ISO-8601 date or datetime string
    ///
    /// The leading `YYYY-MM-DD` portion is parsed and the day is normalized
    /// to the 1st. Accepts `"2024-01-01"`, `"2024-01-15"`, and
    /// `"2024-01-01T00:00:00.000Z"` alike.
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let date_part = s.get(..10).unwrap_or(s);
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        Ok(Self::from_date(date))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_timestamp())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Month::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid date format: {}", s),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_day() {
        let month = Month::new(2025, 1);
        assert_eq!(
            month.first_day(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_next_within_year() {
        let jan = Month::new(2025, 1);
        assert_eq!(jan.next(), Month::new(2025, 2));
    }

    #[test]
    fn test_next_year_rollover() {
        let dec = Month::new(2024, 12);
        assert_eq!(dec.next(), Month::new(2025, 1));
    }

    #[test]
    fn test_prev_year_rollover() {
        let jan = Month::new(2025, 1);
        assert_eq!(jan.prev(), Month::new(2024, 12));
    }

    #[test]
    fn test_ordering() {
        assert!(Month::new(2024, 12) < Month::new(2025, 1));
        assert!(Month::new(2025, 2) > Month::new(2025, 1));
        assert_eq!(Month::new(2025, 1), Month::new(2025, 1));
    }

    #[test]
    fn test_from_date_normalizes_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(Month::from_date(date), Month::new(2024, 3));
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(Month::parse("2024-01-01").unwrap(), Month::new(2024, 1));
    }

    #[test]
    fn test_parse_datetime() {
        assert_eq!(
            Month::parse("2024-01-01T00:00:00.000Z").unwrap(),
            Month::new(2024, 1)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Month::parse("not a date").is_err());
        assert!(Month::parse("2024-13-01").is_err());
        assert!(Month::parse("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Month::new(2025, 3)), "2025-03");
    }

    #[test]
    fn test_to_timestamp() {
        assert_eq!(
            Month::new(2024, 2).to_timestamp(),
            "2024-02-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let month = Month::new(2024, 11);
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2024-11-01T00:00:00.000Z\"");

        let back: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, back);
    }
}
