//! Priority inference from free text.
//!
//! Three disjoint keyword sets are tested in precedence order: urgency, then
//! medium effort, then low urgency. Text that hits none of them falls back to
//! a length rule (two words or fewer reads as a small chore).

use std::sync::LazyLock;

use ghost_core::enums::Priority;
use regex::Regex;

static URGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(urgent|asap|today|tonight|deadline|due\s*(today|tmrw|tomorrow)|fix|bug|prod|production|broken|fails?)\b",
    )
    .expect("invalid urgency regex")
});

static MEDIUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(review|present|demo|deploy|submit|email|reply|study|prepare|practice|test|quiz|midterm|final)\b",
    )
    .expect("invalid medium regex")
});

static LOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(idea|someday|nice to have|maybe|later)\b").expect("invalid low regex")
});

/// Guess a priority for a freshly typed task.
///
/// Total and deterministic over any input, including the empty string (which
/// takes the length default, `low`).
#[must_use]
pub fn infer_priority(text: &str) -> Priority {
    let t = text.trim().to_lowercase();

    if URGENT.is_match(&t) {
        return Priority::High;
    }
    if MEDIUM.is_match(&t) {
        return Priority::Med;
    }
    if LOW.is_match(&t) {
        return Priority::Low;
    }
    if t.split_whitespace().count() <= 2 {
        Priority::Low
    } else {
        Priority::Med
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fix login bug", Priority::High)]
    #[case("Submit taxes ASAP", Priority::High)]
    #[case("report due tomorrow", Priority::High)]
    #[case("prod is broken", Priority::High)]
    #[case("review PR", Priority::Med)]
    #[case("prepare slides for the demo", Priority::Med)]
    #[case("maybe learn guitar", Priority::Low)]
    #[case("nice to have: dark mode toggle", Priority::Low)]
    #[case("buy milk", Priority::Low)]
    #[case("call mom about the trip", Priority::Med)]
    #[case("", Priority::Low)]
    #[case("   ", Priority::Low)]
    fn infers(#[case] text: &str, #[case] expected: Priority) {
        assert_eq!(infer_priority(text), expected);
    }

    #[test]
    fn urgency_beats_medium_beats_low() {
        assert_eq!(infer_priority("urgent: review slides maybe"), Priority::High);
        assert_eq!(infer_priority("maybe study later"), Priority::Med);
    }

    #[test]
    fn keywords_need_word_boundaries() {
        // "prefix" contains "fix", "latest" contains "test"
        assert_eq!(infer_priority("prefix"), Priority::Low);
        assert_eq!(infer_priority("read the latest newsletter issue"), Priority::Med);
    }
}
