use ghost_engine::compose::compose_plan;
use ghost_engine::planner::{classify_plan, plan};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::{TextView, output};

#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub rule: String,
    pub steps: [String; 3],
    pub message: String,
}

impl PlanReport {
    pub fn for_text(text: &str) -> Self {
        let steps = plan(text);
        let message = compose_plan(text, &steps);
        Self {
            rule: classify_plan(text).label(),
            steps,
            message,
        }
    }
}

impl TextView for PlanReport {
    fn to_text(&self) -> String {
        self.message.clone()
    }
}

/// Handle `kghost plan`.
pub fn handle(text: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&PlanReport::for_text(text), flags.format)
}
