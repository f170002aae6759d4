//! Transit API port
//!
//! Defines how the application reaches the transit authority's HTTP API.
//! Adapters in the infrastructure layer implement this port.

use async_trait::async_trait;
use domain::ApiEndpoint;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::error::ApplicationError;

/// Ordered form parameters of one API request
pub type ApiParams = Vec<(String, String)>;

/// Port for raw transit API calls
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitApiPort: Send + Sync {
    /// Call `endpoint` with `params` and return the decoded JSON body
    ///
    /// Credentials are the adapter's concern and must not appear in `params`.
    async fn call(
        &self,
        endpoint: ApiEndpoint,
        params: ApiParams,
    ) -> Result<Value, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn TransitApiPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TransitApiPort>();
    }
}
