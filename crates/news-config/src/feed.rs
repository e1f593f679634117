//! Home feed sizing.

use serde::{Deserialize, Serialize};

const fn default_latest_count() -> usize {
    5
}

const fn default_home_count() -> usize {
    6
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedConfig {
    /// Articles in the "latest" strip.
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,

    /// Articles in the category grid.
    #[serde(default = "default_home_count")]
    pub home_count: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            latest_count: default_latest_count(),
            home_count: default_home_count(),
        }
    }
}
