//! EMT openbus client
//!
//! Every endpoint is a form-encoded POST carrying the caller's parameters
//! plus the shared `idClient`/`passKey` pair. Bodies come back as JSON and
//! are returned untouched; interpreting envelopes is the caller's job.

use std::time::Duration;

use async_trait::async_trait;
use domain::ApiEndpoint;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::EmtConfig;
use crate::credentials::EmtCredentials;
use crate::endpoints::endpoint_path;
use crate::error::EmtError;

/// Trait for EMT service clients
#[async_trait]
pub trait EmtClient: Send + Sync {
    /// POST `params` to `endpoint` and return the decoded JSON body
    async fn call(
        &self,
        endpoint: ApiEndpoint,
        params: &[(String, String)],
    ) -> Result<Value, EmtError>;

    /// Same as [`EmtClient::call`], looking the endpoint up by name
    async fn call_by_name(
        &self,
        name: &str,
        params: &[(String, String)],
    ) -> Result<Value, EmtError> {
        let endpoint =
            ApiEndpoint::from_name(name).map_err(|_| EmtError::UnknownEndpoint(name.to_string()))?;
        self.call(endpoint, params).await
    }
}

/// HTTP client for the EMT openbus proxy server
#[derive(Debug)]
pub struct OpenBusClient {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
    credentials: EmtCredentials,
}

impl OpenBusClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &EmtConfig, credentials: EmtCredentials) -> Result<Self, EmtError> {
        config.validate().map_err(EmtError::ConfigurationError)?;
        let base_url = config
            .parsed_base_url()
            .map_err(EmtError::ConfigurationError)?;

        if !config.verify_certs {
            warn!(base_url = %base_url, "TLS certificate verification is disabled for the EMT service");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(!config.verify_certs)
            .build()
            .map_err(|e| EmtError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout_secs: config.timeout_secs,
            credentials,
        })
    }

    /// Create a client, reading credentials from the configured file
    ///
    /// # Errors
    ///
    /// Returns an error if the credential file is unreadable or the client
    /// cannot be built.
    pub fn from_config(config: &EmtConfig) -> Result<Self, EmtError> {
        let credentials = EmtCredentials::from_file(&config.credentials_path)?;
        Self::new(config, credentials)
    }

    /// Full URL of an endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be joined onto the base URL.
    pub fn endpoint_url(&self, endpoint: ApiEndpoint) -> Result<Url, EmtError> {
        self.base_url
            .join(endpoint_path(endpoint))
            .map_err(|e| EmtError::ConfigurationError(e.to_string()))
    }

    /// Request parameters followed by the credential pair
    fn form_body<'a>(&'a self, params: &'a [(String, String)]) -> Vec<(&'a str, &'a str)> {
        params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain([
                ("idClient", self.credentials.client_id()),
                ("passKey", self.credentials.pass_key()),
            ])
            .collect()
    }

    /// Decode a response body as JSON
    fn parse_body(body: &str) -> Result<Value, EmtError> {
        serde_json::from_str(body).map_err(|e| EmtError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl EmtClient for OpenBusClient {
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    async fn call(
        &self,
        endpoint: ApiEndpoint,
        params: &[(String, String)],
    ) -> Result<Value, EmtError> {
        let url = self.endpoint_url(endpoint)?;

        debug!(%url, param_count = params.len(), "Calling EMT endpoint");

        let response = self
            .client
            .post(url)
            .form(&self.form_body(params))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EmtError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    EmtError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmtError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| EmtError::ParseError(e.to_string()))?;

        debug!(%body, "EMT response");

        Self::parse_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenBusClient {
        OpenBusClient::new(&EmtConfig::for_testing(), EmtCredentials::new("id", "key")).unwrap()
    }

    #[test]
    fn test_endpoint_url() {
        let url = client().endpoint_url(ApiEndpoint::GeoArriveStop).unwrap();
        assert_eq!(
            url.as_str(),
            "https://openbus.emtmadrid.es/emt-proxy-server/last/geo/GetArriveStop.php"
        );
    }

    #[test]
    fn test_form_body_appends_credentials() {
        let client = client();
        let params = vec![("idStop".to_string(), "71".to_string())];
        let body = client.form_body(&params);
        assert_eq!(
            body,
            vec![("idStop", "71"), ("idClient", "id"), ("passKey", "key")]
        );
    }

    #[test]
    fn test_parse_body_object_and_array() {
        assert!(OpenBusClient::parse_body(r#"{"resultCode": 0}"#).unwrap().is_object());
        assert!(OpenBusClient::parse_body("[]").unwrap().is_array());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = OpenBusClient::parse_body("<html>oops</html>").unwrap_err();
        assert!(matches!(err, EmtError::ParseError(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EmtConfig {
            timeout_secs: 0,
            ..EmtConfig::for_testing()
        };
        let err = OpenBusClient::new(&config, EmtCredentials::new("id", "key")).unwrap_err();
        assert!(matches!(err, EmtError::ConfigurationError(_)));
    }

    #[tokio::test]
    async fn test_call_by_unknown_name() {
        let err = client().call_by_name("bus_nowhere", &[]).await.unwrap_err();
        assert!(matches!(err, EmtError::UnknownEndpoint(name) if name == "bus_nowhere"));
    }
}
