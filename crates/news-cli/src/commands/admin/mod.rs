//! Admin-only record management.

pub mod model;
pub mod source;
pub mod term;
pub mod user;

use crate::context::AppContext;

/// Refuse to continue unless an admin is signed in.
pub fn require_admin(ctx: &AppContext) -> anyhow::Result<()> {
    let admin = ctx.session.require_admin()?;
    tracing::debug!(user_id = admin.id, "admin session verified");
    Ok(())
}
