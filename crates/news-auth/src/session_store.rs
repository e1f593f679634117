//! Persistence for the serialized session identity.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

/// Default key the identity is stored under.
pub const DEFAULT_SESSION_KEY: &str = "current-user";

const STATE_DIR_NAME: &str = ".newsroom";

/// Key-value slot holding the serialized signed-in user.
pub trait SessionStore {
    /// Stored value, or `None` when nothing (or only whitespace) is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when the value cannot be written.
    fn store(&mut self, value: &str) -> Result<(), AuthError>;

    /// Remove the stored value. Deleting an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when the value cannot be removed.
    fn delete(&mut self) -> Result<(), AuthError>;
}

/// One file named after the key inside a state directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(state_dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: state_dir.as_ref().join(key),
        }
    }

    /// Store under `~/.newsroom/<key>`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the home directory is unknown.
    pub fn in_home(key: &str) -> Result<Self, AuthError> {
        default_state_dir().map(|dir| Self::new(dir, key))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `~/.newsroom`.
///
/// # Errors
///
/// Returns [`AuthError::SessionStore`] if the home directory is unknown.
pub fn default_state_dir() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|home| home.join(STATE_DIR_NAME))
        .ok_or_else(|| {
            AuthError::SessionStore("home directory not found; cannot store session".into())
        })
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AuthError::SessionStore(format!("read {}: {e}", self.path.display()))
        })?;
        Ok(Some(content).filter(|s| !s.trim().is_empty()))
    }

    fn store(&mut self, value: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStore(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, value)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::SessionStore(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    fn delete(&mut self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::SessionStore(format!("delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

/// Process-local store for tests and throwaway sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySessionStore {
    value: Option<String>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>, AuthError> {
        Ok(self.value.clone().filter(|s| !s.trim().is_empty()))
    }

    fn store(&mut self, value: &str) -> Result<(), AuthError> {
        self.value = Some(value.to_string());
        Ok(())
    }

    fn delete(&mut self) -> Result<(), AuthError> {
        self.value = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_dir_is_under_home() {
        let dir = default_state_dir().expect("should resolve");
        assert!(dir.ends_with(".newsroom"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut store = FileSessionStore::new(tmp.path().join("state"), DEFAULT_SESSION_KEY);

        assert_eq!(store.load().unwrap(), None);
        store.store("{\"id\":1}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{\"id\":1}"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(store.path())
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        store.delete().unwrap();
        assert!(!store.path().exists());
        store.delete().expect("deleting twice is fine");
    }

    #[test]
    fn whitespace_only_file_reads_as_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path(), "current-user");
        std::fs::write(store.path(), "   \n  ").expect("write");
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn memory_store_cycle() {
        let mut store = MemorySessionStore::default();
        store.store("value").unwrap();
        assert_eq!(store.value(), Some("value"));
        store.delete().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
