//! User profile storage port
//!
//! The chat framework keeps per-user settings; the only one read here is
//! the preferred locale tag.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for user profile lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserProfileStore: Send + Sync {
    /// Locale tag stored for `identity` (e.g. `es`), if any
    async fn preferred_locale(&self, identity: &str) -> Result<Option<String>, ApplicationError>;
}
