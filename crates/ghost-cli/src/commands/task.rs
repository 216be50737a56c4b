use anyhow::Context;
use chrono::Utc;
use ghost_core::board::{Board, MoveOutcome, NOTICE_DONE};
use ghost_core::entities::Task;
use ghost_core::enums::Column;
use ghost_engine::priority::infer_priority;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;
use crate::output::{TextView, output};

/// A task after a mutation, plus the line the ghost would say about it.
#[derive(Debug, Serialize)]
pub struct TaskChange {
    pub task: Task,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl TextView for TaskChange {
    fn to_text(&self) -> String {
        match &self.notice {
            Some(notice) => format!("{}\n{notice}", self.task.to_text()),
            None => self.task.to_text(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MoveReport {
    pub id: String,
    #[serde(flatten)]
    pub outcome: MoveOutcome,
}

impl TextView for MoveReport {
    fn to_text(&self) -> String {
        match &self.outcome {
            MoveOutcome::Moved { column, notice } => format!("{} -> {column}. {notice}", self.id),
            MoveOutcome::Unchanged { column } => format!("{} is already in {column}.", self.id),
            MoveOutcome::Rejected { notice, .. } => notice.clone(),
        }
    }
}

/// Handle `kghost task`.
pub fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut board = ctx.store.load().context("failed to load board")?;

    if let TaskCommands::List { column } = action {
        let tasks = board
            .tasks
            .into_iter()
            .filter(|t| column.is_none_or(|c| t.column == c))
            .collect::<Vec<_>>();
        return output(&tasks, flags.format);
    }

    if let TaskCommands::Move { id, column } = action {
        let outcome = board.move_task(id, *column, Utc::now())?;
        if matches!(outcome, MoveOutcome::Moved { .. }) {
            ctx.store.save(&board).context("failed to save board")?;
        }
        if outcome.is_rejected() {
            tracing::info!(id = %id, target = %column, "move blocked by WIP limit");
        }
        return output(
            &MoveReport {
                id: id.clone(),
                outcome,
            },
            flags.format,
        );
    }

    let change = apply(action, &mut board, ctx.config.general.study_mode)?;
    ctx.store.save(&board).context("failed to save board")?;
    output(&change, flags.format)
}

/// Apply a mutating task command to the board.
fn apply(action: &TaskCommands, board: &mut Board, study_mode: bool) -> anyhow::Result<TaskChange> {
    let now = Utc::now();
    let change = match action {
        TaskCommands::Add { text, priority } => {
            let priority = priority.unwrap_or_else(|| infer_priority(text));
            let task = board.add(text, priority, study_mode, now)?;
            let notice = (task.column == Column::Doing).then(|| "Focus set.".to_string());
            TaskChange { task, notice }
        }
        TaskCommands::Edit { id, text } => {
            board.update_text(id, text)?;
            unchanged(board, id)?
        }
        TaskCommands::Priority { id, level } => {
            match level {
                Some(level) => board.set_priority(id, *level)?,
                None => {
                    board.cycle_priority(id)?;
                }
            }
            unchanged(board, id)?
        }
        TaskCommands::Done { id } => {
            let column = board.toggle_done(id, now)?;
            TaskChange {
                task: current(board, id)?,
                notice: (column == Column::Done).then(|| NOTICE_DONE.to_string()),
            }
        }
        TaskCommands::Remove { id } => TaskChange {
            task: board.remove(id)?,
            notice: Some("Removed.".to_string()),
        },
        TaskCommands::Activate { id } => {
            board.set_active(id, now)?;
            unchanged(board, id)?
        }
        TaskCommands::List { .. } | TaskCommands::Move { .. } => {
            anyhow::bail!("task list/move are handled before mutation")
        }
    };
    Ok(change)
}

fn current(board: &Board, id: &str) -> anyhow::Result<Task> {
    board
        .get(id)
        .cloned()
        .with_context(|| format!("task '{id}' disappeared from the board"))
}

fn unchanged(board: &Board, id: &str) -> anyhow::Result<TaskChange> {
    Ok(TaskChange {
        task: current(board, id)?,
        notice: None,
    })
}
