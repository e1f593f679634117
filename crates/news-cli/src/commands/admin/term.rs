use news_core::enums::EntityKind;
use news_store::editor::GlossaryForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{TermCommands, TermFields};
use crate::commands::shared::records;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nws term`.
pub fn handle(action: &TermCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TermCommands::List => output(ctx.service.glossary().list(), flags.format),
        TermCommands::Create(fields) => {
            records::save(ctx, apply(GlossaryForm::default(), fields), None, flags)
        }
        TermCommands::Update { id, fields } => {
            let form = apply(records::open_form(&ctx.service, Some(*id))?, fields);
            records::save(ctx, form, Some(*id), flags)
        }
        TermCommands::Delete(args) => records::delete(ctx, EntityKind::GlossaryTerm, args, flags),
    }
}

fn apply(mut form: GlossaryForm, fields: &TermFields) -> GlossaryForm {
    if let Some(term) = &fields.term {
        form.term.clone_from(term);
    }
    if let Some(definition) = &fields.definition {
        form.definition.clone_from(definition);
    }
    if let Some(category) = &fields.category {
        form.category.clone_from(category);
    }
    form
}
