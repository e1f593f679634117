//! # news-config
//!
//! Layered configuration loading for Newsroom using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NEWSROOM_*` prefix, `__` as separator)
//! 2. Project-level `.newsroom/config.toml`
//! 3. User-level `~/.config/newsroom/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `NEWSROOM_SESSION__STATE_DIR` -> `session.state_dir`,
//! `NEWSROOM_FEED__HOME_COUNT` -> `feed.home_count`, etc.
//!
//! ```no_run
//! use news_config::NewsConfig;
//!
//! let config = NewsConfig::load_with_dotenv().expect("config");
//! println!("session key: {}", config.session.key);
//! ```

mod error;
mod feed;
mod general;
mod session;

pub use error::ConfigError;
pub use feed::FeedConfig;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "NEWSROOM_";
const PROJECT_CONFIG: &str = ".newsroom/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl NewsConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`load_with_dotenv`](Self::load_with_dotenv).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] for malformed sources and
    /// [`ConfigError::InvalidValue`] for values that fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the current directory first, then [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.session.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("newsroom").join("config.toml"))
    }
}
