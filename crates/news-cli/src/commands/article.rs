use news_store::filter::{BROWSE_CATEGORIES, CategoryFilter, ListQuery};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ArticleCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nws article`.
pub fn handle(action: &ArticleCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ArticleCommands::Feed { category } => {
            let feed = ctx.service.home_feed(
                &CategoryFilter::parse(category),
                ctx.config.feed.latest_count,
                ctx.config.feed.home_count,
            );
            output(&feed, flags.format)
        }
        ArticleCommands::Get { id } => output(ctx.service.article(*id)?, flags.format),
        ArticleCommands::Search { query, category } => {
            let query = ListQuery::new(query.as_str(), CategoryFilter::parse(category));
            output(&ctx.service.search_articles(&query), flags.format)
        }
        ArticleCommands::Categories => output(BROWSE_CATEGORIES, flags.format),
    }
}
