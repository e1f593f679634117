use news_core::enums::{EntityKind, SourceCategory};
use news_store::editor::SourceForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{SourceCommands, SourceFields};
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::records;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nws source`.
pub fn handle(
    action: &SourceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SourceCommands::List => output(ctx.service.sources().list(), flags.format),
        SourceCommands::Create(fields) => {
            let form = apply(SourceForm::default(), fields)?;
            records::save(ctx, form, None, flags)
        }
        SourceCommands::Update { id, fields } => {
            let form = apply(records::open_form(&ctx.service, Some(*id))?, fields)?;
            records::save(ctx, form, Some(*id), flags)
        }
        SourceCommands::Delete(args) => records::delete(ctx, EntityKind::Source, args, flags),
    }
}

fn apply(mut form: SourceForm, fields: &SourceFields) -> anyhow::Result<SourceForm> {
    if let Some(name) = &fields.name {
        form.name.clone_from(name);
    }
    if let Some(url) = &fields.url {
        form.url.clone_from(url);
    }
    if let Some(category) = &fields.category {
        form.category = parse_enum::<SourceCategory>(category)?;
    }
    if let Some(active) = fields.active {
        form.is_active = active;
    }
    if let Some(credibility) = &fields.credibility {
        form.credibility_score.clone_from(credibility);
    }
    Ok(form)
}
