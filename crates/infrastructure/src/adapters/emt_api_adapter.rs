//! EMT API adapter - Implements TransitApiPort using integration_emt

use std::fmt;
use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ApiParams, TransitApiPort};
use async_trait::async_trait;
use domain::ApiEndpoint;
use integration_emt::{EmtClient, EmtConfig, EmtError, OpenBusClient};
use serde_json::Value;
use tracing::{instrument, warn};

/// Adapter for the EMT Madrid openbus service
pub struct EmtApiAdapter {
    client: Arc<dyn EmtClient>,
}

impl fmt::Debug for EmtApiAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmtApiAdapter").finish_non_exhaustive()
    }
}

impl EmtApiAdapter {
    /// Wrap an EMT client
    pub const fn new(client: Arc<dyn EmtClient>) -> Self {
        Self { client }
    }

    /// Build the openbus client from configuration, reading the credential file
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the credentials cannot be read or
    /// the HTTP client cannot be built.
    pub fn from_config(config: &EmtConfig) -> Result<Self, ApplicationError> {
        let client = OpenBusClient::from_config(config).map_err(map_emt_error)?;
        Ok(Self::new(Arc::new(client)))
    }
}

/// Map client failures onto application errors
///
/// Setup problems are configuration errors; everything on the wire is an
/// external service failure.
fn map_emt_error(error: EmtError) -> ApplicationError {
    match error {
        EmtError::Credentials(_) | EmtError::ConfigurationError(_) => {
            ApplicationError::Configuration(error.to_string())
        },
        other => ApplicationError::ExternalService(format!("EMT request failed: {other}")),
    }
}

#[async_trait]
impl TransitApiPort for EmtApiAdapter {
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    async fn call(
        &self,
        endpoint: ApiEndpoint,
        params: ApiParams,
    ) -> Result<Value, ApplicationError> {
        self.client.call(endpoint, &params).await.map_err(|e| {
            warn!(error = %e, "EMT call failed");
            map_emt_error(e)
        })
    }
}
