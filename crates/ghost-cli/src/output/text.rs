//! Plain-text views for `--format text`.

use ghost_core::entities::Task;
use ghost_core::enums::Column;
use ghost_core::responses::{AskResponse, BoardMetrics, SuggestionResult};

/// Human-readable rendering of a command result.
pub trait TextView {
    fn to_text(&self) -> String;
}

impl TextView for Task {
    fn to_text(&self) -> String {
        format!("{}  [{}] {}  ({})", self.id, self.priority, self.text, self.column)
    }
}

impl TextView for Vec<Task> {
    fn to_text(&self) -> String {
        if self.is_empty() {
            return String::from("(no tasks)");
        }
        let mut out = Vec::new();
        for column in Column::ALL {
            let tasks = self.iter().filter(|t| t.column == column).collect::<Vec<_>>();
            if tasks.is_empty() {
                continue;
            }
            out.push(format!("{} ({})", column.title(), tasks.len()));
            for task in tasks {
                out.push(format!("  {}  [{}] {}", task.id, task.priority, task.text));
            }
        }
        out.join("\n")
    }
}

impl TextView for SuggestionResult {
    fn to_text(&self) -> String {
        self.message.clone()
    }
}

impl TextView for AskResponse {
    fn to_text(&self) -> String {
        self.say.clone()
    }
}

impl TextView for BoardMetrics {
    fn to_text(&self) -> String {
        format!(
            "Throughput (7d): {}\nAvg cycle time: {:.1} days",
            self.throughput_7d, self.avg_cycle_time_days
        )
    }
}
