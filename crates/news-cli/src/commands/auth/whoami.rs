use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&super::session_response(ctx.session.current()), flags.format)
}
