use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    signed_out: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.logout()?;
    output(&AuthLogoutResponse { signed_out: true }, flags.format)
}
