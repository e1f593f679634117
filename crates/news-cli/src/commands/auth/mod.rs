mod login;
mod logout;
mod register;
mod whoami;

use news_core::entities::User;
use news_core::responses::SessionResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `nws auth <subcommand>`.
pub fn handle(action: &AuthCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags),
        AuthCommands::Register(args) => register::handle(args, ctx, flags),
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Whoami => whoami::handle(ctx, flags),
    }
}

fn session_response(user: Option<&User>) -> SessionResponse {
    SessionResponse {
        is_admin: user.is_some_and(User::is_admin),
        user: user.cloned(),
    }
}
