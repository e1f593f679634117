use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::commands::admin;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Article { action } => commands::article::handle(&action, ctx, flags),
        Commands::Glossary { action } => commands::glossary::handle(&action, ctx, flags),
        Commands::Bookmark { action } => commands::bookmark::handle(&action, ctx, flags),
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags),
        Commands::User { action } => {
            admin::require_admin(ctx)?;
            admin::user::handle(&action, ctx, flags)
        }
        Commands::Source { action } => {
            admin::require_admin(ctx)?;
            admin::source::handle(&action, ctx, flags)
        }
        Commands::Term { action } => {
            admin::require_admin(ctx)?;
            admin::term::handle(&action, ctx, flags)
        }
        Commands::Model { action } => {
            admin::require_admin(ctx)?;
            admin::model::handle(&action, ctx, flags)
        }
        Commands::Shell => commands::shell::handle(ctx, flags),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use news_auth::{AuthError, FileSessionStore};
    use news_config::NewsConfig;
    use news_store::StoreError;
    use pretty_assertions::assert_eq;

    use super::dispatch;
    use crate::cli::Cli;
    use crate::context::AppContext;

    fn context(dir: &tempfile::TempDir) -> AppContext {
        let store = FileSessionStore::new(dir.path(), "current-user");
        AppContext::with_store(NewsConfig::default(), store).expect("context")
    }

    fn run(ctx: &mut AppContext, args: &[&str]) -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(std::iter::once("nws").chain(args.iter().copied()))
            .expect("cli should parse");
        let flags = cli.global_flags();
        dispatch(cli.command, ctx, &flags)
    }

    fn login_admin(ctx: &mut AppContext) {
        run(
            ctx,
            &["auth", "login", "--email", "admin@example.com", "--password", "password"],
        )
        .expect("admin login");
    }

    #[test]
    fn admin_commands_require_a_session() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let mut ctx = context(&dir);
        let err = run(&mut ctx, &["source", "list"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuthError>(),
            Some(AuthError::NotAuthenticated)
        ));
    }

    #[test]
    fn readers_are_forbidden_from_admin_commands() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let mut ctx = context(&dir);
        run(
            &mut ctx,
            &["auth", "login", "--email", "john.doe@example.com", "--password", "password"],
        )
        .unwrap();
        let before = ctx.service.glossary().len();
        let err = run(&mut ctx, &["term", "create", "--term", "RSS", "--definition", "Feeds"])
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuthError>(),
            Some(AuthError::Forbidden)
        ));
        assert_eq!(ctx.service.glossary().len(), before);
    }

    #[test]
    fn wrong_password_keeps_previous_session() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let mut ctx = context(&dir);
        login_admin(&mut ctx);
        let err = run(
            &mut ctx,
            &["auth", "login", "--email", "admin@example.com", "--password", "wrong"],
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuthError>(),
            Some(AuthError::InvalidCredentials)
        ));
        assert!(ctx.session.is_admin());
    }

    #[test]
    fn source_create_update_delete_flow() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let mut ctx = context(&dir);
        login_admin(&mut ctx);
        let before = ctx.service.sources().len();

        run(
            &mut ctx,
            &[
                "source",
                "create",
                "--name",
                "Test",
                "--url",
                "https://test.com",
                "--credibility",
                "7.5",
            ],
        )
        .unwrap();
        assert_eq!(ctx.service.sources().len(), before + 1);
        let id = ctx.service.sources().list()[before].id;

        let id_arg = id.to_string();
        run(&mut ctx, &["source", "update", &id_arg, "--credibility", "9.0"]).unwrap();
        let updated = ctx.service.sources().get(id).expect("source kept its id");
        assert_eq!(updated.name, "Test");
        assert!((updated.credibility_score - 9.0).abs() < f64::EPSILON);
        assert_eq!(ctx.service.sources().len(), before + 1);

        run(&mut ctx, &["source", "delete", &id_arg, "--yes"]).unwrap();
        assert_eq!(ctx.service.sources().len(), before);
    }

    #[test]
    fn invalid_credibility_is_reported_and_not_saved() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let mut ctx = context(&dir);
        login_admin(&mut ctx);
        let before = ctx.service.sources().list().to_vec();

        let err = run(
            &mut ctx,
            &["source", "create", "--name", "Test", "--url", "https://test.com", "--credibility", "10.1"],
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::Validation(_))
        ));
        assert_eq!(ctx.service.sources().list(), before.as_slice());
    }

    #[test]
    fn updating_unknown_record_is_not_found() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let mut ctx = context(&dir);
        login_admin(&mut ctx);
        let err = run(&mut ctx, &["term", "update", "404", "--term", "Nope"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::NotFound { id: 404, .. })
        ));
    }

    #[test]
    fn session_survives_into_next_context() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        {
            let mut ctx = context(&dir);
            login_admin(&mut ctx);
        }
        let ctx = context(&dir);
        assert!(ctx.session.is_admin());
    }

    #[test]
    fn bookmarks_and_reading_need_no_session() {
        let dir = tempfile::TempDir::new().expect("tmp dir");
        let mut ctx = context(&dir);
        run(&mut ctx, &["bookmark", "add", "5"]).unwrap();
        run(&mut ctx, &["article", "feed", "--category", "sports"]).unwrap();
        run(&mut ctx, &["glossary", "search", "--grouped"]).unwrap();
        assert!(ctx.service.bookmarks().contains(5));
        assert!(run(&mut ctx, &["article", "get", "404"]).is_err());
    }
}
