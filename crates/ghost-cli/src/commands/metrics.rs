use anyhow::Context;
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kghost metrics`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let board = ctx.store.load().context("failed to load board")?;
    output(&board.metrics(Utc::now()), flags.format)
}
