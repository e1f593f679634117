use clap::Subcommand;
use news_core::ids::RecordId;

/// Bookmark commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BookmarkCommands {
    /// List bookmarked articles.
    List,
    /// Bookmark an article.
    Add { id: RecordId },
    /// Remove a bookmark.
    Remove { id: RecordId },
}
