use news_store::filter::{BROWSE_CATEGORIES, CategoryFilter, ListQuery};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GlossaryCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nws glossary`.
pub fn handle(
    action: &GlossaryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GlossaryCommands::Search {
            query,
            category,
            grouped,
        } => {
            let query = ListQuery::new(query.as_str(), CategoryFilter::parse(category));
            if *grouped {
                output(&ctx.service.glossary_index(&query), flags.format)
            } else {
                output(&ctx.service.search_glossary(&query), flags.format)
            }
        }
        GlossaryCommands::Categories => output(BROWSE_CATEGORIES, flags.format),
    }
}
