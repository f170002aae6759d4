//! EMT service configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the EMT openbus client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmtConfig {
    /// Base URL every endpoint path is joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Two-line file holding the client id and pass key
    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,

    /// Verify TLS certificates (default: false, the service's chain does
    /// not validate)
    #[serde(default)]
    pub verify_certs: bool,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://openbus.emtmadrid.es/emt-proxy-server/last/".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_credentials_path() -> PathBuf {
    PathBuf::from("etc/madtrans.conf")
}

fn default_user_agent() -> String {
    format!("madtrans/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for EmtConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            credentials_path: default_credentials_path(),
            verify_certs: false,
            user_agent: default_user_agent(),
        }
    }
}

impl EmtConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Parse the base URL, ensuring a trailing slash so paths join beneath it
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute URL.
    pub fn parsed_base_url(&self) -> Result<Url, String> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| format!("invalid base_url {:?}: {e}", self.base_url))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        self.parsed_base_url()?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
