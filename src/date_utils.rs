use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, the unit of aggregation. Rendered as "YYYY-MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// SQL LIKE pattern matching dates within this month ("YYYY-MM-%").
    pub fn date_pattern(&self) -> String {
        format!("{:04}-{:02}-%", self.year, self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in month '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month in '{}'", s))?;
        Period::new(year, month).ok_or_else(|| format!("Month out of range in '{}'", s))
    }
}

impl TryFrom<String> for Period {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Period> for String {
    fn from(p: Period) -> String {
        p.to_string()
    }
}

/// Parse a stored transaction date ("YYYY-MM-DD"). Malformed dates yield
/// None and are excluded from period filtering rather than failing.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse_and_display() {
        let p: Period = "2025-03".parse().unwrap();
        assert_eq!(p.year(), 2025);
        assert_eq!(p.month(), 3);
        assert_eq!(p.to_string(), "2025-03");
    }

    #[test]
    fn test_period_parse_rejects_garbage() {
        assert!("2025".parse::<Period>().is_err());
        assert!("2025-13".parse::<Period>().is_err());
        assert!("2025-00".parse::<Period>().is_err());
        assert!("03-2025x".parse::<Period>().is_err());
    }

    #[test]
    fn test_period_contains() {
        let p: Period = "2025-10".parse().unwrap();
        assert!(p.contains(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()));
        assert!(p.contains(NaiveDate::from_ymd_opt(2025, 10, 31).unwrap()));
        assert!(!p.contains(NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()));
        assert!(!p.contains(NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()));
    }

    #[test]
    fn test_date_pattern() {
        let p: Period = "2025-03".parse().unwrap();
        assert_eq!(p.date_pattern(), "2025-03-%");
    }

    #[test]
    fn test_parse_date_malformed() {
        assert!(parse_date("2025-10-18").is_some());
        assert!(parse_date("18/10/2025").is_none());
        assert!(parse_date("").is_none());
    }
}
