//! Locale resolution for incoming queries

use std::fmt;
use std::sync::Arc;

use domain::Locale;
use tracing::{debug, instrument, warn};

use crate::ports::UserProfileStore;

/// Resolves the reply locale of a sender
///
/// The default tag is fixed at startup; per-user tags come from the profile
/// store. The result is returned as a value, never installed globally.
pub struct LocaleResolver {
    profiles: Arc<dyn UserProfileStore>,
    default_tag: String,
}

impl fmt::Debug for LocaleResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleResolver")
            .field("default_tag", &self.default_tag)
            .finish_non_exhaustive()
    }
}

impl LocaleResolver {
    /// Create a resolver falling back to `default_tag`
    pub fn new(profiles: Arc<dyn UserProfileStore>, default_tag: impl Into<String>) -> Self {
        Self {
            profiles,
            default_tag: default_tag.into(),
        }
    }

    /// Locale of the process-wide default tag
    #[must_use]
    pub fn default_locale(&self) -> Locale {
        Locale::from_tag(&self.default_tag)
    }

    /// Resolve the locale for `sender`
    ///
    /// Without a sender, or when the profile has no locale, the default tag
    /// applies. A failing profile store is logged and also falls back.
    #[instrument(skip(self))]
    pub async fn resolve(&self, sender: Option<&str>) -> Locale {
        let Some(sender) = sender else {
            return self.default_locale();
        };

        let tag = match self.profiles.preferred_locale(sender).await {
            Ok(Some(tag)) => tag,
            Ok(None) => self.default_tag.clone(),
            Err(e) => {
                warn!(error = %e, "Profile lookup failed, using default locale");
                self.default_tag.clone()
            },
        };

        let locale = Locale::from_tag(&tag);
        debug!(%tag, %locale, "Resolved locale");
        locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockUserProfileStore;

    fn resolver(store: MockUserProfileStore, default_tag: &str) -> LocaleResolver {
        LocaleResolver::new(Arc::new(store), default_tag)
    }

    #[tokio::test]
    async fn no_sender_uses_default() {
        let mut store = MockUserProfileStore::new();
        store.expect_preferred_locale().never();

        let resolver = resolver(store, "es");
        assert_eq!(resolver.resolve(None).await, Locale::Es);
    }

    #[tokio::test]
    async fn profile_locale_wins() {
        let mut store = MockUserProfileStore::new();
        store
            .expect_preferred_locale()
            .withf(|identity| identity == "alice")
            .returning(|_| Ok(Some("es".to_string())));

        let resolver = resolver(store, "en");
        assert_eq!(resolver.resolve(Some("alice")).await, Locale::Es);
    }

    #[tokio::test]
    async fn profile_without_locale_uses_default() {
        let mut store = MockUserProfileStore::new();
        store.expect_preferred_locale().returning(|_| Ok(None));

        let resolver = resolver(store, "es");
        assert_eq!(resolver.resolve(Some("bob")).await, Locale::Es);
    }

    #[tokio::test]
    async fn non_spanish_profile_is_english() {
        let mut store = MockUserProfileStore::new();
        store
            .expect_preferred_locale()
            .returning(|_| Ok(Some("fr".to_string())));

        let resolver = resolver(store, "es");
        assert_eq!(resolver.resolve(Some("carol")).await, Locale::En);
    }

    #[tokio::test]
    async fn store_failure_falls_back_to_default() {
        let mut store = MockUserProfileStore::new();
        store
            .expect_preferred_locale()
            .returning(|_| Err(ApplicationError::ProfileStore("down".to_string())));

        let resolver = resolver(store, "es");
        assert_eq!(resolver.resolve(Some("dave")).await, Locale::Es);
    }

    #[test]
    fn debug_shows_default_tag() {
        let resolver = resolver(MockUserProfileStore::new(), "es");
        assert!(format!("{resolver:?}").contains("es"));
    }
}
