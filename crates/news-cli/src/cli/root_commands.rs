use clap::Subcommand;

use crate::cli::subcommands::{
    ArticleCommands, AuthCommands, BookmarkCommands, GlossaryCommands, ModelCommands,
    SourceCommands, TermCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse and search articles.
    Article {
        #[command(subcommand)]
        action: ArticleCommands,
    },
    /// Search the glossary.
    Glossary {
        #[command(subcommand)]
        action: GlossaryCommands,
    },
    /// Manage bookmarked articles.
    Bookmark {
        #[command(subcommand)]
        action: BookmarkCommands,
    },
    /// Sign in, register, sign out.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Manage users (admin).
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Manage news sources (admin).
    Source {
        #[command(subcommand)]
        action: SourceCommands,
    },
    /// Manage glossary terms (admin).
    Term {
        #[command(subcommand)]
        action: TermCommands,
    },
    /// Manage AI model configurations (admin).
    Model {
        #[command(subcommand)]
        action: ModelCommands,
    },
    /// Read commands from stdin, one per line, against one live session.
    Shell,
}
