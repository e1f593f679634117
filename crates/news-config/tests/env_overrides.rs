use figment::Jail;
use news_config::NewsConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_map_to_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("NEWSROOM_SESSION__STATE_DIR", "/var/lib/newsroom");
        jail.set_env("NEWSROOM_FEED__LATEST_COUNT", "2");
        jail.set_env("NEWSROOM_GENERAL__SEED_FIXTURES", "false");

        let config = NewsConfig::load().expect("config loads");
        assert_eq!(
            config.session.state_dir().as_deref(),
            Some(std::path::Path::new("/var/lib/newsroom"))
        );
        assert_eq!(config.feed.latest_count, 2);
        assert!(!config.general.seed_fixtures);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".newsroom")).expect("mkdir");
        jail.create_file(
            ".newsroom/config.toml",
            r"
[feed]
home_count = 8
latest_count = 4
",
        )?;
        jail.set_env("NEWSROOM_FEED__HOME_COUNT", "10");

        let config = NewsConfig::load().expect("config loads");
        assert_eq!(config.feed.home_count, 10);
        assert_eq!(config.feed.latest_count, 4);
        Ok(())
    });
}

#[test]
fn log_filter_variable_does_not_break_loading() {
    Jail::expect_with(|jail| {
        jail.set_env("NEWSROOM_LOG", "debug");
        let config = NewsConfig::load().expect("config loads");
        assert_eq!(config, NewsConfig::default());
        Ok(())
    });
}
