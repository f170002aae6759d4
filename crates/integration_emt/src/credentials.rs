//! Shared-secret credentials for the EMT service
//!
//! Read once at startup from a two-line file: client id, then pass key.

use std::fmt;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use crate::error::EmtError;

/// Client id and pass key injected into every request
#[derive(Clone)]
pub struct EmtCredentials {
    client_id: String,
    pass_key: SecretString,
}

impl fmt::Debug for EmtCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmtCredentials")
            .field("client_id", &self.client_id)
            .field("pass_key", &"[REDACTED]")
            .finish()
    }
}

impl EmtCredentials {
    /// Create credentials from their parts
    pub fn new(client_id: impl Into<String>, pass_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            pass_key: SecretString::from(pass_key.into()),
        }
    }

    /// Parse the two-line credential format
    ///
    /// # Errors
    ///
    /// Returns [`EmtError::Credentials`] if either line is missing or blank.
    pub fn parse(contents: &str) -> Result<Self, EmtError> {
        let mut lines = contents.lines().map(str::trim);

        let client_id = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| EmtError::Credentials("missing client id on line 1".to_string()))?;
        let pass_key = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| EmtError::Credentials("missing pass key on line 2".to_string()))?;

        Ok(Self::new(client_id, pass_key))
    }

    /// Read and parse a credential file
    ///
    /// # Errors
    ///
    /// Returns [`EmtError::Credentials`] if the file cannot be read or is malformed.
    pub fn from_file(path: &Path) -> Result<Self, EmtError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            EmtError::Credentials(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(&contents)
    }

    /// The `idClient` form value
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The `passKey` form value
    #[must_use]
    pub fn pass_key(&self) -> &str {
        self.pass_key.expose_secret()
    }
}
