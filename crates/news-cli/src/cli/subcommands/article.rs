use clap::Subcommand;
use news_core::ids::RecordId;

/// Article commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ArticleCommands {
    /// Home feed: featured article, latest articles, and a category slice.
    Feed {
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Get an article by ID.
    Get { id: RecordId },
    /// Search titles, content and authors.
    Search {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// List the category selector values.
    Categories,
}
