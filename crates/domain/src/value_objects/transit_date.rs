//! Transit date value object
//!
//! The API expects `dd/mm/yyyy`. Users type either `-` or `/` as separator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

const API_FORMAT: &str = "%d/%m/%Y";

/// A calendar date in day/month/year order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransitDate(NaiveDate);

impl TransitDate {
    /// Parse a `dd-mm-yyyy` or `dd/mm/yyyy` date
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDate`] if the input is not a valid
    /// day/month/year date with a four-digit year.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized = input.trim().replace('-', "/");
        // `%Y` takes any digit count, so `24` would become year 24
        let year = normalized.rsplit('/').next().unwrap_or_default();
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidDate(input.to_string()));
        }
        NaiveDate::parse_from_str(&normalized, API_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidDate(input.to_string()))
    }

    /// Wrap an existing date
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Underlying date
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Wire representation, always `dd/mm/yyyy`
    #[must_use]
    pub fn to_api_string(&self) -> String {
        self.0.format(API_FORMAT).to_string()
    }
}

impl fmt::Display for TransitDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(API_FORMAT))
    }
}

impl TryFrom<String> for TransitDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TransitDate> for String {
    fn from(date: TransitDate) -> Self {
        date.to_api_string()
    }
}
