//! Where the signed-in identity is persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_key() -> String {
    "current-user".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the session file. Empty means `~/.newsroom`.
    #[serde(default)]
    pub state_dir: String,

    /// File name the identity is stored under.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            state_dir: String::new(),
            key: default_key(),
        }
    }
}

impl SessionConfig {
    /// Explicitly configured state directory, if any.
    #[must_use]
    pub fn state_dir(&self) -> Option<PathBuf> {
        (!self.state_dir.is_empty()).then(|| PathBuf::from(&self.state_dir))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.key.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session.key".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.key.contains(['/', '\\']) || self.key == "." || self.key == ".." {
            return Err(ConfigError::InvalidValue {
                field: "session.key".into(),
                reason: format!("'{}' is not a plain file name", self.key),
            });
        }
        Ok(())
    }
}
