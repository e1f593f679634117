use news_core::ids::RecordId;
use news_core::responses::BookmarksResponse;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BookmarkCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct BookmarkChangeResponse {
    id: RecordId,
    bookmarked: bool,
    changed: bool,
}

/// Handle `nws bookmark`.
pub fn handle(
    action: &BookmarkCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BookmarkCommands::List => {
            let articles: Vec<_> = ctx
                .service
                .bookmarked_articles()
                .into_iter()
                .cloned()
                .collect();
            let count = u32::try_from(articles.len())?;
            output(&BookmarksResponse { articles, count }, flags.format)
        }
        BookmarkCommands::Add { id } => {
            let changed = ctx.service.bookmark(*id)?;
            output(
                &BookmarkChangeResponse {
                    id: *id,
                    bookmarked: true,
                    changed,
                },
                flags.format,
            )
        }
        BookmarkCommands::Remove { id } => {
            let changed = ctx.service.unbookmark(*id);
            output(
                &BookmarkChangeResponse {
                    id: *id,
                    bookmarked: false,
                    changed,
                },
                flags.format,
            )
        }
    }
}
