//! Report date handling.
//!
//! The reporting API expects every date as a `YYYY-MM-DD` string. This module
//! provides the [`ReportDate`] type, which accepts either a pre-formatted
//! string (validated on construction) or a structured `chrono` date.

use crate::error::ConfigError;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire format of every date sent to the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date formatted for the reporting API.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use flurry_api::ReportDate;
///
/// // From a string
/// let date = ReportDate::new("2013-05-14").unwrap();
/// assert_eq!(date.as_ref(), "2013-05-14");
///
/// // From a structured date
/// let date = ReportDate::from(NaiveDate::from_ymd_opt(2013, 5, 14).unwrap());
/// assert_eq!(date.to_string(), "2013-05-14");
///
/// // Invalid strings are rejected
/// assert!(ReportDate::new("14/05/2013").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReportDate(String);

impl ReportDate {
    /// Creates a report date from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDate`] if the string is not a valid
    /// calendar date in `YYYY-MM-DD` format.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map_err(|_| ConfigError::InvalidDate { value: value.clone() })?;
        Ok(Self::from(date))
    }

    /// Returns the current UTC date.
    #[must_use]
    pub fn today() -> Self {
        Self::from(Utc::now())
    }
}

impl From<NaiveDate> for ReportDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ReportDate {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from(datetime.date_naive())
    }
}

impl From<&NaiveDate> for ReportDate {
    fn from(date: &NaiveDate) -> Self {
        Self::from(*date)
    }
}

impl From<&Self> for ReportDate {
    fn from(date: &Self) -> Self {
        date.clone()
    }
}

impl FromStr for ReportDate {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ReportDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ReportDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ReportDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_string_dates_are_validated() {
        assert_eq!(ReportDate::new("2013-05-14").unwrap().as_ref(), "2013-05-14");
        assert!(ReportDate::new("2013-02-30").is_err());
        assert!(ReportDate::new("2013/05/14").is_err());
        assert!(ReportDate::new("").is_err());
    }

    #[test]
    fn test_structured_dates_are_formatted() {
        let naive = NaiveDate::from_ymd_opt(2013, 5, 14).unwrap();
        assert_eq!(ReportDate::from(naive).as_ref(), "2013-05-14");

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let datetime = offset.with_ymd_and_hms(2013, 5, 14, 23, 30, 0).unwrap();
        assert_eq!(ReportDate::from(datetime).as_ref(), "2013-05-14");
    }

    #[test]
    fn test_parse_and_display() {
        let date: ReportDate = "2013-05-14".parse().unwrap();
        assert_eq!(format!("{date}"), "2013-05-14");
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let date = ReportDate::new("2013-05-14").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), r#""2013-05-14""#);

        let parsed: ReportDate = serde_json::from_str(r#""2013-05-14""#).unwrap();
        assert_eq!(parsed, date);
        assert!(serde_json::from_str::<ReportDate>(r#""yesterday""#).is_err());
    }
}
