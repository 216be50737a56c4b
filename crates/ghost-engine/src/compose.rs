//! Fixed phrases and the plan message format.

/// Returned when no workable task exists.
pub const ALL_CAUGHT_UP: &str = "You're all caught up. Nice!";

/// Reply for a question-like focus task when the conversational provider fails.
pub const QUESTION_FALLBACK: &str = "Try one small actionable idea first.";

/// Reply for a question-like task the engine just picked, when the
/// conversational provider fails.
pub const PICKED_QUESTION_FALLBACK: &str = "Start with one practical improvement.";

/// Reply for a free-form ask when the conversational provider fails.
pub const ASK_FALLBACK: &str = "I believe in you. Start with one tiny step.";

/// Reply for an empty ask.
pub const EMPTY_ASK: &str = "I'm here to help! What do you need?";

/// `Focus on: <text>.` followed by the numbered steps, one per line.
#[must_use]
pub fn compose_plan(text: &str, steps: &[String]) -> String {
    let mut out = format!("Focus on: {}.\nThen:", text.trim());
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!("\n{}) {step}", i + 1));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::plan;
    use pretty_assertions::assert_eq;

    #[test]
    fn plan_message_shape() {
        let message = compose_plan("make lemonade", &plan("make lemonade"));
        assert_eq!(
            message,
            "Focus on: make lemonade.\nThen:\n\
             1) Gather basics for “make lemonade” (ingredients + tools).\n\
             2) Do step 1: lemonade (wash/slice/measure).\n\
             3) Combine core parts, taste once, adjust one thing (sweet/sour/salt)."
        );
    }

    #[test]
    fn plan_message_has_five_lines() {
        let message = compose_plan("  fix login bug ", &plan("fix login bug"));
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Focus on: fix login bug.");
        assert_eq!(lines[1], "Then:");
        assert!(lines[2].starts_with("1) "));
        assert!(lines[4].starts_with("3) "));
    }
}
