use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &AuthLoginArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let users = ctx.service.users().list();
    let user = ctx.session.login(users, &args.email, &args.password)?;
    output(&super::session_response(Some(user)), flags.format)
}
