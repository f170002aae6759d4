//! User profile stores
//!
//! Two implementations of [`UserProfileStore`]: a read-only TOML file loaded
//! at startup, and an in-memory map for tests and embedding.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::UserProfileStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;
use tracing::{debug, info};

/// Preferences of one user as stored in the profile file
#[derive(Debug, Clone, Default, Deserialize)]
struct StoredProfile {
    #[serde(default)]
    locale: Option<String>,
}

/// Profiles read from a TOML file of the form
///
/// ```toml
/// [alice]
/// locale = "es"
/// ```
#[derive(Debug, Clone)]
pub struct FileUserProfileStore {
    path: PathBuf,
    profiles: HashMap<String, StoredProfile>,
}

impl FileUserProfileStore {
    /// Read and parse the profile file
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::ProfileStore`] if the file is unreadable or
    /// not a table of profile tables.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ApplicationError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::ProfileStore(format!("cannot read {}: {e}", path.display()))
        })?;
        let store = Self::parse(path, &contents)?;
        info!(path = %path.display(), profiles = store.len(), "Loaded user profiles");
        Ok(store)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ApplicationError> {
        let profiles: HashMap<String, StoredProfile> = toml::from_str(contents).map_err(|e| {
            ApplicationError::ProfileStore(format!("invalid profiles in {}: {e}", path.display()))
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            profiles,
        })
    }

    /// File the profiles were read from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of known users
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the file defines no users
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait]
impl UserProfileStore for FileUserProfileStore {
    async fn preferred_locale(&self, identity: &str) -> Result<Option<String>, ApplicationError> {
        let locale = self
            .profiles
            .get(identity)
            .and_then(|p| p.locale.clone())
            .filter(|l| !l.trim().is_empty());
        debug!(identity, ?locale, "Profile lookup");
        Ok(locale)
    }
}

/// Profiles kept in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserProfileStore {
    locales: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryUserProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred locale of `identity`
    pub fn set_locale(&self, identity: impl Into<String>, locale: impl Into<String>) {
        self.locales.write().insert(identity.into(), locale.into());
    }

    /// Forget the preferences of `identity`
    pub fn remove(&self, identity: &str) -> bool {
        self.locales.write().remove(identity).is_some()
    }
}

#[async_trait]
impl UserProfileStore for InMemoryUserProfileStore {
    async fn preferred_locale(&self, identity: &str) -> Result<Option<String>, ApplicationError> {
        Ok(self.locales.read().get(identity).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn profile_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn file_store_reads_locales() {
        let file = profile_file(
            r#"
            [alice]
            locale = "es"

            [bob]
            locale = "en_GB"

            [carol]
            "#,
        );

        let store = FileUserProfileStore::load(file.path()).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.path(), file.path());
        assert_eq!(
            store.preferred_locale("alice").await.unwrap().as_deref(),
            Some("es")
        );
        assert_eq!(
            store.preferred_locale("bob").await.unwrap().as_deref(),
            Some("en_GB")
        );
        assert_eq!(store.preferred_locale("carol").await.unwrap(), None);
        assert_eq!(store.preferred_locale("dave").await.unwrap(), None);
    }

    #[tokio::test]
    async fn blank_locale_counts_as_unset() {
        let file = profile_file("[alice]\nlocale = \" \"\n");
        let store = FileUserProfileStore::load(file.path()).unwrap();
        assert_eq!(store.preferred_locale("alice").await.unwrap(), None);
    }

    #[test]
    fn empty_file_has_no_profiles() {
        let file = profile_file("");
        let store = FileUserProfileStore::load(file.path()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileUserProfileStore::load(dir.path().join("users.toml")).unwrap_err();
        assert!(matches!(err, ApplicationError::ProfileStore(_)));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = profile_file("alice = \"es\"\n");
        let err = FileUserProfileStore::load(file.path()).unwrap_err();
        assert!(matches!(err, ApplicationError::ProfileStore(_)));
    }

    #[tokio::test]
    async fn in_memory_store_round_trip() {
        let store = InMemoryUserProfileStore::new();
        assert_eq!(store.preferred_locale("alice").await.unwrap(), None);

        store.set_locale("alice", "es");
        assert_eq!(
            store.preferred_locale("alice").await.unwrap().as_deref(),
            Some("es")
        );

        let shared = store.clone();
        assert!(shared.remove("alice"));
        assert_eq!(store.preferred_locale("alice").await.unwrap(), None);
        assert!(!store.remove("alice"));
    }
}
