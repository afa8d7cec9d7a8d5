//! Campaign Date Types
//!
//! Calendar dates for the campaign, serialized as ISO `YYYY-MM-DD` strings.
//!
//! # Example
//!
//! ```
//! use standing_events::CampaignDate;
//!
//! let date = CampaignDate::from_ymd(3025, 1, 1).unwrap();
//! assert!(date.is_first_of_month());
//! assert_eq!(date.to_string(), "3025-01-01");
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Format used for display and serialization.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single day on the campaign calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CampaignDate(NaiveDate);

impl CampaignDate {
    /// Creates a date from year, month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ParseDateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CampaignDate)
            .ok_or_else(|| ParseDateError::OutOfRange(format!("{year}-{month}-{day}")))
    }

    /// Creates the conventional campaign start date.
    pub fn start() -> Self {
        CampaignDate(NaiveDate::from_ymd_opt(3025, 1, 1).unwrap_or(NaiveDate::MIN))
    }

    /// Advances the date by one day, handling month and year rollovers.
    pub fn advance_day(&mut self) {
        self.0 = self.0.succ_opt().unwrap_or(self.0);
    }

    /// Returns the following day.
    pub fn next_day(self) -> Self {
        let mut next = self;
        next.advance_day();
        next
    }

    /// Returns the preceding day.
    pub fn previous_day(self) -> Self {
        CampaignDate(self.0.pred_opt().unwrap_or(self.0))
    }

    /// Returns true on the day monthly checks run.
    pub fn is_first_of_month(&self) -> bool {
        self.0.day() == 1
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for CampaignDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Error type for parsing a CampaignDate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseDateError {
    #[error("invalid date format: '{0}', expected 'YYYY-MM-DD'")]
    InvalidFormat(String),
    #[error("date out of range: '{0}'")]
    OutOfRange(String),
}

impl FromStr for CampaignDate {
    type Err = ParseDateError;

    /// Parses a CampaignDate from a string like "3025-06-01".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(CampaignDate)
            .map_err(|_| ParseDateError::InvalidFormat(s.to_string()))
    }
}

// Serialize as a plain string rather than chrono's struct form
impl Serialize for CampaignDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CampaignDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
