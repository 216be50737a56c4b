//! The board: the task collection plus the active (focused) task.
//!
//! Every mutation the UI layer can make lives here. WIP ceilings are enforced
//! on moves: a move into a full column leaves the task where it was and
//! returns [`MoveOutcome::Rejected`] with a notice meant to be spoken.

use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::{Column, Priority};
use crate::errors::CoreError;
use crate::ids::new_task_id;
use crate::responses::{BoardMetrics, BoardState};

/// Spoken after a successful move.
pub const NOTICE_MOVED: &str = "Moved.";
/// Spoken after a move into `done`.
pub const NOTICE_DONE: &str = "Nice! Task complete.";
/// Spoken when a move is blocked by a WIP ceiling.
pub const NOTICE_WIP_LIMIT: &str =
    "WIP limit hit. Don't overstress yourself. Please finish something first.";

/// Result of a WIP-aware move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    Moved { column: Column, notice: String },
    /// The task was already in the target column.
    Unchanged { column: Column },
    Rejected {
        column: Column,
        limit: usize,
        notice: String,
    },
}

impl MoveOutcome {
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The user-facing notice, if the outcome carries one.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Moved { notice, .. } | Self::Rejected { notice, .. } => Some(notice),
            Self::Unchanged { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Board {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub active_id: Option<String>,
}

impl Board {
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            active_id: None,
        }
    }

    /// The starter board shown on first launch.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(vec![
            Task::new("t1", "Set up project", Priority::None),
            Task::new("t2", "Design ghost UI", Priority::Med).in_column(Column::Doing),
            Task::new("t3", "Win Hackathon 😈", Priority::High).in_column(Column::Done),
        ])
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Task, CoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::not_found(id))
    }

    #[must_use]
    pub fn count_in(&self, column: Column) -> usize {
        self.tasks.iter().filter(|t| t.column == column).count()
    }

    pub fn tasks_in(&self, column: Column) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.column == column)
    }

    /// The active task if set, otherwise the first task in `doing`.
    #[must_use]
    pub fn focus_task(&self) -> Option<&Task> {
        self.active_id
            .as_deref()
            .and_then(|id| self.get(id))
            .or_else(|| self.tasks_in(Column::Doing).next())
    }

    /// Add a task to the backlog.
    ///
    /// In study mode, if nothing is in `doing`, the new task is promoted
    /// straight to `doing` and becomes the active task.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `text` is empty after trimming.
    pub fn add(
        &mut self,
        text: &str,
        priority: Priority,
        study_mode: bool,
        now: DateTime<Utc>,
    ) -> Result<Task, CoreError> {
        let text = validate_text(text)?;
        let had_doing = self.count_in(Column::Doing) > 0;
        let id = new_task_id();
        self.tasks.push(Task::new(id.clone(), text, priority));

        if study_mode && !had_doing {
            self.set_active(&id, now)?;
        }
        self.get(&id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(&id))
    }

    /// Move a task, honoring the target column's WIP ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown id. A blocked move is not
    /// an error; it is reported as [`MoveOutcome::Rejected`].
    pub fn move_task(
        &mut self,
        id: &str,
        target: Column,
        now: DateTime<Utc>,
    ) -> Result<MoveOutcome, CoreError> {
        let current = self.get(id).ok_or_else(|| CoreError::not_found(id))?.column;
        if current == target {
            return Ok(MoveOutcome::Unchanged { column: target });
        }

        if let Some(limit) = target.wip_limit()
            && self.count_in(target) >= limit
        {
            return Ok(MoveOutcome::Rejected {
                column: current,
                limit,
                notice: NOTICE_WIP_LIMIT.to_string(),
            });
        }

        self.get_mut(id)?.enter(target, now);
        let notice = if target == Column::Done {
            NOTICE_DONE
        } else {
            NOTICE_MOVED
        };
        Ok(MoveOutcome::Moved {
            column: target,
            notice: notice.to_string(),
        })
    }

    /// Flip a task between `done` and `backlog`. Returns the new column.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown id.
    pub fn toggle_done(&mut self, id: &str, now: DateTime<Utc>) -> Result<Column, CoreError> {
        let task = self.get_mut(id)?;
        let target = if task.column == Column::Done {
            Column::Backlog
        } else {
            Column::Done
        };
        task.enter(target, now);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        Ok(target)
    }

    /// Advance the priority `none → low → med → high → none`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown id.
    pub fn cycle_priority(&mut self, id: &str) -> Result<Priority, CoreError> {
        let task = self.get_mut(id)?;
        task.priority = task.priority.next();
        Ok(task.priority)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown id.
    pub fn set_priority(&mut self, id: &str, priority: Priority) -> Result<(), CoreError> {
        self.get_mut(id)?.priority = priority;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown id, or
    /// [`CoreError::Validation`] for empty text.
    pub fn update_text(&mut self, id: &str, text: &str) -> Result<(), CoreError> {
        let text = validate_text(text)?;
        self.get_mut(id)?.text = text;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown id.
    pub fn remove(&mut self, id: &str) -> Result<Task, CoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::not_found(id))?;
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        Ok(self.tasks.remove(idx))
    }

    /// Make `id` the active task: promote it to `doing` and send any other
    /// `doing` task back to the backlog.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown id.
    pub fn set_active(&mut self, id: &str, now: DateTime<Utc>) -> Result<(), CoreError> {
        if self.get(id).is_none() {
            return Err(CoreError::not_found(id));
        }
        for task in &mut self.tasks {
            if task.id == id {
                task.enter(Column::Doing, now);
            } else if task.column == Column::Doing {
                task.enter(Column::Backlog, now);
            }
        }
        self.active_id = Some(id.to_string());
        Ok(())
    }

    /// Snapshot of counts for the conversational responder.
    #[must_use]
    pub fn board_state(&self, now: DateTime<Utc>) -> BoardState {
        let today = now.date_naive();
        let done_today = self
            .tasks
            .iter()
            .filter(|t| t.finished_at.is_some_and(|at| at.date_naive() == today))
            .count();
        BoardState {
            backlog_count: saturating_u32(self.count_in(Column::Backlog)),
            doing_count: saturating_u32(self.count_in(Column::Doing)),
            done_today: saturating_u32(done_today),
        }
    }

    /// Seven-day throughput and average cycle time.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn metrics(&self, now: DateTime<Utc>) -> BoardMetrics {
        let cutoff = now - Duration::days(7);
        let throughput = self
            .tasks
            .iter()
            .filter(|t| t.finished_at.is_some_and(|at| at >= cutoff))
            .count();

        let cycles: Vec<i64> = self
            .tasks
            .iter()
            .filter_map(|t| Some((t.finished_at? - t.started_at?).num_milliseconds()))
            .collect();
        let avg_cycle_time_days = if cycles.is_empty() {
            0.0
        } else {
            let avg_ms = cycles.iter().sum::<i64>() as f64 / cycles.len() as f64;
            (avg_ms / 86_400_000.0 * 10.0).round() / 10.0
        };

        BoardMetrics {
            throughput_7d: saturating_u32(throughput),
            avg_cycle_time_days,
        }
    }
}

fn validate_text(text: &str) -> Result<String, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("task text must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
