use anyhow::Context;
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kghost suggest`.
///
/// Coaches the focus task when there is one; otherwise picks from the backlog
/// and makes the pick the active task.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut board = ctx.store.load().context("failed to load board")?;

    let result = if let Some(focus) = board.focus_task().cloned() {
        ctx.engine.coach(&focus).await
    } else {
        let result = ctx.engine.suggest(&board.tasks).await;
        if let Some(id) = result.task_id.as_deref() {
            board.set_active(id, Utc::now())?;
            ctx.store.save(&board).context("failed to save board")?;
        }
        result
    };

    output(&result, flags.format)
}
