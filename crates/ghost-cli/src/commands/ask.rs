use anyhow::Context;
use chrono::Utc;
use ghost_core::responses::AskResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kghost ask`.
pub async fn handle(text: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = ctx.store.load().context("failed to load board")?;
    let state = board.board_state(Utc::now());
    let say = ctx.engine.ask(text, Some(&state)).await;
    output(&AskResponse { say }, flags.format)
}
