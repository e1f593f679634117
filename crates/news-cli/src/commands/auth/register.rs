use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(
    args: &AuthRegisterArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx
        .session
        .register(&args.name, &args.email, &args.password, Utc::now())?;
    output(&super::session_response(Some(user)), flags.format)
}
