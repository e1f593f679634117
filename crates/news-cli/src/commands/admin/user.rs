use news_core::enums::{EntityKind, Role};
use news_store::editor::UserForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{UserCommands, UserFields};
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::records;
use crate::context::AppContext;
use crate::output::output;

/// Handle `nws user`.
pub fn handle(action: &UserCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::List => output(ctx.service.users().list(), flags.format),
        UserCommands::Create(fields) => {
            let form = apply(UserForm::default(), fields)?;
            records::save(ctx, form, None, flags)
        }
        UserCommands::Update { id, fields } => {
            let form = apply(records::open_form(&ctx.service, Some(*id))?, fields)?;
            records::save(ctx, form, Some(*id), flags)
        }
        UserCommands::Delete(args) => records::delete(ctx, EntityKind::User, args, flags),
    }
}

fn apply(mut form: UserForm, fields: &UserFields) -> anyhow::Result<UserForm> {
    if let Some(name) = &fields.name {
        form.name.clone_from(name);
    }
    if let Some(email) = &fields.email {
        form.email.clone_from(email);
    }
    if let Some(role) = &fields.role {
        form.role = parse_enum::<Role>(role)?;
    }
    if let Some(avatar) = &fields.avatar {
        form.avatar.clone_from(avatar);
    }
    Ok(form)
}
