//! Prompt text and reply parsing shared by the chat vendors.

use ghost_core::responses::{BoardState, ProviderSuggestion, TaskSummary};

use crate::error::ProviderError;

const PERSONA: &str = "You are Kanban Ghost, a friendly productivity companion who lives on \
the user's kanban board. You are warm, brief, and practical. You never lecture.";

/// System prompt for picking a task.
pub fn suggest_system() -> String {
    format!(
        "{PERSONA}\n\n\
         The user will send the tasks they could start right now as JSON.\n\
         Pick exactly ONE of them. Prefer higher priority (high > med > low > none); \
         among equals prefer the shorter, quicker task.\n\
         Reply with strict JSON only, no prose and no code fences:\n\
         {{\"id\": \"<task id from the list>\", \"say\": \"<one short encouraging sentence>\"}}"
    )
}

/// System prompt for free-form questions.
pub fn ask_system() -> String {
    format!(
        "{PERSONA}\n\n\
         Answer the user's message in 20 words or fewer. If they sound stuck or \
         overwhelmed, suggest one tiny concrete step. Plain text only."
    )
}

/// The candidate list as the model sees it.
pub fn suggest_user(candidates: &[TaskSummary]) -> String {
    let tasks = serde_json::to_string_pretty(candidates).unwrap_or_else(|_| "[]".into());
    format!("Tasks available to start now:\n{tasks}\n\nPick the best one to work on next.")
}

/// The user's message, prefixed with board counts when known.
pub fn ask_user(text: &str, board: Option<&BoardState>) -> String {
    let context = board.map_or_else(String::new, |b| {
        format!(
            "Board right now: {} in backlog, {} in progress, {} done today.\n\n",
            b.backlog_count, b.doing_count, b.done_today
        )
    });
    format!("{context}User says: \"{}\"", text.trim())
}

/// Remove Markdown code fences (```` ``` ```` or ```` ```json ````) around a reply.
pub fn strip_code_fences(content: &str) -> &str {
    let mut body = content.trim();
    if let Some(rest) = body.strip_prefix("```") {
        // drop the info string (e.g. "json") up to the first newline
        body = rest.split_once('\n').map_or(rest, |(_, after)| after);
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

/// Parse a suggestion reply into `{id?, say?}`.
///
/// # Errors
///
/// Returns [`ProviderError::EmptyResponse`] for a blank reply and
/// [`ProviderError::Parse`] when the body is not a JSON object.
pub fn parse_suggestion(content: &str) -> Result<ProviderSuggestion, ProviderError> {
    let body = strip_code_fences(content);
    if body.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    serde_json::from_str(body).map_err(|e| ProviderError::Parse(format!("suggestion reply: {e}")))
}
