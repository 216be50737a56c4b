//! Offline conversational replies.
//!
//! Used when no conversational provider is configured at all. A configured
//! provider that fails gets the fixed fallback phrases instead; see
//! [`crate::engine`].

use std::sync::LazyLock;

use async_trait::async_trait;
use ghost_core::responses::BoardState;
use regex::Regex;

use crate::collaborator::{CollaboratorError, ConversationalResponder};

static TASK_INTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(i need to|i have to|i must|i should|i want to)\b")
        .expect("invalid task intent regex")
});

static TASK_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:need to|have to|must|should|want to)\s+(.+?)(?:\.|$)")
        .expect("invalid task phrase regex")
});

static URGENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(today|urgent|now)\b").expect("invalid urgent regex"));

static OVERWHELMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(overwhelm|too much|stressed|can't|cannot)").expect("invalid overwhelm regex")
});

static STUCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(help|stuck|don't know|how)\b").expect("invalid stuck regex")
});

static CELEBRATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(done|finished|completed|did it|yay|yes)\b").expect("invalid celebrate regex")
});

/// Pick a canned reply by pattern.
#[must_use]
fn heuristic_reply(text: &str) -> String {
    let msg = text.trim().to_lowercase();

    if TASK_INTENT.is_match(&msg) {
        let task = TASK_PHRASE
            .captures(text.trim())
            .and_then(|caps| caps.get(1))
            .map_or("that", |m| m.as_str().trim());
        return if URGENT.is_match(&msg) {
            format!("Got it! \"{task}\" sounds urgent - HIGH priority! 🔥")
        } else {
            format!("Adding \"{task}\" to your list! Let's make it happen! 💪")
        };
    }

    if OVERWHELMED.is_match(&msg) {
        return "Deep breath! Let's focus on ONE task. What's most important right now?"
            .to_string();
    }

    if STUCK.is_match(&msg) {
        return "I'm here! Try breaking it into smaller steps, or switch to something easier first."
            .to_string();
    }

    if CELEBRATE.is_match(&msg) {
        return "Awesome work! 🎉 You're crushing it! What's next?".to_string();
    }

    "You've got this! Start with one small step. 💪".to_string()
}

/// Offline [`ConversationalResponder`]: ordered pattern replies. Never fails.
///
/// The engine answers with this whenever no conversational provider is
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicResponder;

#[async_trait]
impl ConversationalResponder for HeuristicResponder {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn respond(
        &self,
        text: &str,
        _board: Option<&BoardState>,
    ) -> Result<String, CollaboratorError> {
        Ok(heuristic_reply(text))
    }
}
