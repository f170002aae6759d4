//! Query service - Answers transit queries end to end

use std::fmt;
use std::sync::Arc;

use domain::{Query, QueryParams, RelayMessage};
use tracing::{debug, info, instrument};

use super::catalog::Catalog;
use super::handler_registry::{HandlerRegistry, api_params};
use super::locale_resolver::LocaleResolver;
use crate::error::ApplicationError;
use crate::ports::TransitApiPort;

/// Resolves the locale, calls the API, and renders the reply
pub struct QueryService {
    api: Arc<dyn TransitApiPort>,
    resolver: LocaleResolver,
    registry: HandlerRegistry,
}

impl fmt::Debug for QueryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryService")
            .field("resolver", &self.resolver)
            .field("handlers", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl QueryService {
    /// Create a query service
    pub const fn new(
        api: Arc<dyn TransitApiPort>,
        resolver: LocaleResolver,
        registry: HandlerRegistry,
    ) -> Self {
        Self {
            api,
            resolver,
            registry,
        }
    }

    /// Answer a query
    ///
    /// Returns `None` when the query has no sender, since there is nobody
    /// to reply to; no API call is made in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails at the transport level. API
    /// error codes and malformed payloads become reply text instead.
    #[instrument(skip(self, query), fields(kind = %query.kind()))]
    pub async fn handle(&self, query: Query) -> Result<Option<RelayMessage>, ApplicationError> {
        let Some(sender) = query.sender else {
            debug!("Query without sender, no reply");
            return Ok(None);
        };

        let msg = self.answer(&query.params, Some(&sender)).await?;
        Ok(Some(RelayMessage::reply(sender, query.src, msg)))
    }

    /// Render the reply text for `params` in the locale of `sender`
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails at the transport level.
    #[instrument(skip(self, params), fields(kind = %params.kind()))]
    pub async fn answer(
        &self,
        params: &QueryParams,
        sender: Option<&str>,
    ) -> Result<String, ApplicationError> {
        let handler = self.registry.get(params.kind())?;
        let locale = self.resolver.resolve(sender).await;
        let catalog = Catalog::new(locale);

        let raw = self
            .api
            .call(handler.endpoint, api_params(params, locale))
            .await?;

        let reply = handler.render(&raw, &catalog);
        info!(
            endpoint = %handler.endpoint,
            %locale,
            reply_len = reply.len(),
            "Query answered"
        );
        Ok(reply)
    }
}
