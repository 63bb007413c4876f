//! Permission checks for schedule management commands.

use crate::{bot::Context, errors::Result};
use tracing::warn;

/// Allows the command only for users listed in `ADMIN_USER_IDS`.
pub async fn is_admin(ctx: Context<'_>) -> Result<bool> {
    let user_id = ctx.author().id.to_string();
    let allowed = ctx.data().is_admin(&user_id);
    if !allowed {
        warn!(
            "User {user_id} tried to run admin command `{}`",
            ctx.command().name
        );
    }
    Ok(allowed)
}
