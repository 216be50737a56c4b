//! Question-vs-action classification.

use std::sync::LazyLock;

use regex::Regex;

use crate::planner;

static LEADING_INTERROGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(how|what|why|who|when|where|which|can|should|could|would|best|tips|help|advice)\b",
    )
    .expect("invalid interrogative regex")
});

static QUESTION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(how do|how to|what is|why is|best way|tips for)\b")
        .expect("invalid question phrase regex")
});

/// Short replies that are never treated as questions.
const CHIT_CHAT: [&str; 11] = [
    "yo", "hi", "hello", "ok", "okay", "thanks", "thank", "lol", "lmao", "bruh", "bro",
];

/// The two routes a task or utterance can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Question,
    Action,
}

impl Intent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Action => "action",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether `text` reads as a question.
///
/// Rules, first match wins:
/// 1. ends with `?`
/// 2. starts with an interrogative or advice word
/// 3. contains a question phrase anywhere
/// 4. three words or fewer, not chit-chat, and no planner rule covers it
///
/// Empty text is never a question.
#[must_use]
pub fn is_question(text: &str) -> bool {
    let t = text.trim().to_lowercase();
    if t.is_empty() {
        return false;
    }
    if t.ends_with('?') {
        return true;
    }
    if LEADING_INTERROGATIVE.is_match(&t) || QUESTION_PHRASE.is_match(&t) {
        return true;
    }

    t.split_whitespace().count() <= 3
        && !CHIT_CHAT.contains(&t.as_str())
        && !planner::has_specific_rule(&t)
}

#[must_use]
pub fn classify(text: &str) -> Intent {
    if is_question(text) {
        Intent::Question
    } else {
        Intent::Action
    }
}
