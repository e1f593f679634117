//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_seed_fixtures() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Start with the bundled users, sources, glossary and articles.
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: default_seed_fixtures(),
        }
    }
}
