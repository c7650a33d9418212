//! # Temporal Types — Calendar Dates
//!
//! Defines [`IsoDate`], the scalar used for date-typed schema fields
//! (`Tweet.date`, `Stats.date`, `Profile.birthdate`).
//!
//! The wire form is the ISO 8601 calendar date `YYYY-MM-DD` with no time
//! component and no offset. Anything else is a decoding error: a
//! malformed date never reaches validation.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::NsaError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date without time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoDate(NaiveDate);

impl IsoDate {
    /// Build a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`NsaError::Scalar`] if the components do not form a real
    /// calendar date (e.g. February 30th) or the year has more than four
    /// digits.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, NsaError> {
        if !(0..=9999).contains(&year) {
            return Err(NsaError::Scalar {
                kind: "date",
                value: format!("{year:04}-{month:02}-{day:02}"),
                reason: "year must have four digits".into(),
            });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| NsaError::Scalar {
                kind: "date",
                value: format!("{year:04}-{month:02}-{day:02}"),
                reason: "no such calendar date".into(),
            })
    }

    /// Parse a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`NsaError::Scalar`] for any other shape, including
    /// datetimes with a time component.
    pub fn parse(s: &str) -> Result<Self, NsaError> {
        if !has_iso_date_shape(s) {
            return Err(NsaError::Scalar {
                kind: "date",
                value: s.to_string(),
                reason: "expected YYYY-MM-DD".into(),
            });
        }
        NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|e| NsaError::Scalar {
                kind: "date",
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Access the inner `NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Render as `YYYY-MM-DD`.
    pub fn to_iso8601(&self) -> String {
        self.0.format(ISO_DATE_FORMAT).to_string()
    }
}

/// Exactly `DDDD-DD-DD` with ASCII digits. chrono alone also accepts
/// unpadded components, a sign and leading whitespace.
fn has_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl From<NaiveDate> for IsoDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for IsoDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl FromStr for IsoDate {
    type Err = NsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IsoDate {
    type Error = NsaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<IsoDate> for String {
    fn from(date: IsoDate) -> Self {
        date.to_iso8601()
    }
}
