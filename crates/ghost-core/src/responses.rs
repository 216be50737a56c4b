//! Request and response shapes shared by the engine, the vendor clients, and
//! the HTTP backend.
//!
//! Wire types use the field names the browser board sends (`col`,
//! `boardState`, `backlogCount`, ...). Incoming task records are deliberately
//! loose: unknown priorities score as `none`, and records in unknown columns
//! are dropped by [`WireTask::into_task`] rather than failing the request.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::{Column, Priority};

// ---------------------------------------------------------------------------
// Board snapshot
// ---------------------------------------------------------------------------

/// Counts sent alongside a question so the responder can reference the board.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    #[serde(default)]
    pub backlog_count: u32,
    #[serde(default)]
    pub doing_count: u32,
    #[serde(default)]
    pub done_today: u32,
}

/// Throughput and cycle-time badges.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BoardMetrics {
    /// Tasks finished in the trailing seven days.
    pub throughput_7d: u32,
    /// Mean `finished_at - started_at`, in days, rounded to one decimal.
    pub avg_cycle_time_days: f64,
}

// ---------------------------------------------------------------------------
// Suggestion
// ---------------------------------------------------------------------------

/// The compact task view handed to a suggestion provider.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskSummary {
    pub id: String,
    pub text: String,
    pub priority: Priority,
    pub column: Column,
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            text: task.text.clone(),
            priority: task.priority,
            column: task.column,
        }
    }
}

/// What a suggestion provider returns. Both fields are optional; the id must
/// be checked against the candidate set before it is trusted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProviderSuggestion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub say: Option<String>,
}

/// Which branch of the suggestion state machine produced the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// No candidates: the fixed "all caught up" message.
    CaughtUp,
    /// Actionable task: focus line plus three micro-steps.
    Plan,
    /// Question-like task: the conversational responder's reply.
    Answer,
}

/// Who chose the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PickSource {
    Heuristic,
    Provider,
    /// The caller already had a focus task; nothing was selected.
    Focus,
}

/// Output of one suggestion request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestionResult {
    pub task_id: Option<String>,
    pub message: String,
    pub route: Route,
    pub source: Option<PickSource>,
}

// ---------------------------------------------------------------------------
// HTTP wire types
// ---------------------------------------------------------------------------

/// A task record as posted by the browser board.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WireTask {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, alias = "col")]
    pub column: Option<String>,
}

impl WireTask {
    /// Convert into a board task, or `None` when the column is missing or
    /// unknown.
    #[must_use]
    pub fn into_task(self) -> Option<Task> {
        let column = self.column.as_deref()?.parse::<Column>().ok()?;
        let priority = self
            .priority
            .as_deref()
            .map(Priority::from_label)
            .unwrap_or_default();
        Some(Task::new(self.id, self.text, priority).in_column(column))
    }
}

/// `POST /api/suggest` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestRequest {
    #[serde(default)]
    pub tasks: Vec<WireTask>,
}

/// `POST /api/suggest` reply.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub say: String,
}

impl From<SuggestionResult> for SuggestResponse {
    fn from(result: SuggestionResult) -> Self {
        Self {
            id: result.task_id,
            say: result.message,
        }
    }
}

/// `POST /api/ask` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AskRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "boardState")]
    pub board_state: Option<BoardState>,
}

/// `POST /api/ask` reply.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AskResponse {
    pub say: String,
}

/// `POST /api/speak` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: String,
}

/// `POST /api/priority` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PriorityRequest {
    #[serde(default)]
    pub text: String,
}

/// `POST /api/priority` reply.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PriorityResponse {
    pub priority: Priority,
}

/// Error body for non-2xx replies.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
