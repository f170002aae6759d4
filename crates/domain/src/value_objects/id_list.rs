//! Pipe-separated identifier list
//!
//! Stop and line selections are typed space- or pipe-separated and sent to
//! the API pipe-separated. An empty list asks the API for everything.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of stop or line identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdList(Vec<String>);

impl IdList {
    /// Split user input on whitespace and `|`, dropping empty entries
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self(
            input
                .split(|c: char| c.is_whitespace() || c == '|')
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Identifiers in input order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.0
    }

    /// Whether no identifier was given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wire representation, e.g. `71|72|73`
    #[must_use]
    pub fn to_api_string(&self) -> String {
        self.0.join("|")
    }
}

impl fmt::Display for IdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_api_string())
    }
}
