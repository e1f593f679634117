//! `.env` loading writes into the real process environment, which
//! `figment::Jail` does not restore, so these tests live in their own binary.

use figment::Jail;
use news_config::NewsConfig;
use pretty_assertions::assert_eq;

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "NEWSROOM_SESSION__KEY=from-dotenv\n")?;
        let config = NewsConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.session.key, "from-dotenv");
        assert_eq!(config.feed, NewsConfig::default().feed);
        Ok(())
    });
}
