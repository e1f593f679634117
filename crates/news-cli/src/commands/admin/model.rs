use news_core::enums::{EntityKind, ModelProvider};
use news_store::editor::AiModelForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ModelCommands, ModelFields};
use crate::commands::shared::parse::{parse_enum, parse_features};
use crate::commands::shared::records;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nws model`.
pub fn handle(action: &ModelCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ModelCommands::List => output(ctx.service.models().list(), flags.format),
        ModelCommands::Create(fields) => {
            let form = apply(AiModelForm::default(), fields)?;
            records::save(ctx, form, None, flags)
        }
        ModelCommands::Update { id, fields } => {
            let form = apply(records::open_form(&ctx.service, Some(*id))?, fields)?;
            records::save(ctx, form, Some(*id), flags)
        }
        ModelCommands::Delete(args) => records::delete(ctx, EntityKind::AiModel, args, flags),
    }
}

fn apply(mut form: AiModelForm, fields: &ModelFields) -> anyhow::Result<AiModelForm> {
    if let Some(name) = &fields.name {
        form.name.clone_from(name);
    }
    if let Some(provider) = &fields.provider {
        form.provider = parse_enum::<ModelProvider>(provider)?;
    }
    if let Some(model_id) = &fields.model_id {
        form.model_id.clone_from(model_id);
    }
    if let Some(api_key) = &fields.api_key {
        form.api_key.clone_from(api_key);
    }
    if let Some(cost) = &fields.cost_per_token {
        form.cost_per_token.clone_from(cost);
    }
    if let Some(max_tokens) = &fields.max_tokens {
        form.max_tokens.clone_from(max_tokens);
    }
    if let Some(temperature) = &fields.temperature {
        form.temperature.clone_from(temperature);
    }
    if let Some(active) = fields.active {
        form.is_active = active;
    }
    if !fields.features.is_empty() {
        form.features = parse_features(&fields.features)?;
    }
    Ok(form)
}
