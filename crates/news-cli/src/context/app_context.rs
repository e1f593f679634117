use anyhow::Context;
use news_auth::session_store::default_state_dir;
use news_auth::{FileSessionStore, SessionHolder};
use news_config::NewsConfig;
use news_store::NewsService;

/// Shared application resources initialized once at startup.
///
/// Records live only as long as this value; the signed-in identity is the
/// one piece of state written to disk.
pub struct AppContext {
    pub service: NewsService,
    pub session: SessionHolder<FileSessionStore>,
    pub config: NewsConfig,
}

impl AppContext {
    /// Build the service and restore the persisted session.
    pub fn init(config: NewsConfig) -> anyhow::Result<Self> {
        let state_dir = match config.session.state_dir() {
            Some(dir) => dir,
            None => default_state_dir()?,
        };
        let store = FileSessionStore::new(state_dir, &config.session.key);
        Self::with_store(config, store)
    }

    /// Like [`init`](Self::init) with an explicit session store location.
    pub fn with_store(config: NewsConfig, store: FileSessionStore) -> anyhow::Result<Self> {
        let service = if config.general.seed_fixtures {
            NewsService::seeded().context("failed to load bundled fixtures")?
        } else {
            NewsService::empty()
        };
        tracing::debug!(path = %store.path().display(), "using session store");
        let session = SessionHolder::init(store);
        Ok(Self {
            service,
            session,
            config,
        })
    }
}
