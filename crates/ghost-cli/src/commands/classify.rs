use ghost_core::enums::Priority;
use ghost_engine::intent::{Intent, classify};
use ghost_engine::planner::classify_plan;
use ghost_engine::priority::infer_priority;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::{TextView, output};

#[derive(Debug, Serialize)]
pub struct Classification {
    pub intent: &'static str,
    pub priority: Priority,
    pub plan_rule: String,
}

impl Classification {
    pub fn of(text: &str) -> Self {
        Self {
            intent: classify(text).as_str(),
            priority: infer_priority(text),
            plan_rule: classify_plan(text).label(),
        }
    }

    fn is_question(&self) -> bool {
        self.intent == Intent::Question.as_str()
    }
}

impl TextView for Classification {
    fn to_text(&self) -> String {
        let route = if self.is_question() { "answer" } else { "plan" };
        format!(
            "intent: {}\npriority: {}\nroute: {route} ({})",
            self.intent, self.priority, self.plan_rule
        )
    }
}

/// Handle `kghost classify`.
pub fn handle(text: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&Classification::of(text), flags.format)
}

#[cfg(test)]
mod tests {
    use ghost_core::enums::Priority;
    use pretty_assertions::assert_eq;

    use super::Classification;

    #[test]
    fn question_text() {
        let c = Classification::of("how do I start?");
        assert_eq!(c.intent, "question");
        assert!(c.is_question());
    }

    #[test]
    fn short_imperative_with_known_verb_is_an_action() {
        let c = Classification::of("fix bug");
        assert_eq!(c.intent, "action");
        assert_eq!(c.priority, Priority::High);
        assert_eq!(c.plan_rule, "verb:fix");
    }
}
