use clap::Subcommand;
use ghost_core::enums::{Column, Priority};

/// Board task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Add a task to the backlog. Priority is inferred from the text when omitted.
    Add {
        text: String,
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// List tasks, optionally for one column.
    List {
        #[arg(long)]
        column: Option<Column>,
    },
    /// Move a task to another column (WIP limits apply).
    Move { id: String, column: Column },
    /// Replace a task's text.
    Edit { id: String, text: String },
    /// Set a task's priority, or cycle it when no level is given.
    Priority {
        id: String,
        level: Option<Priority>,
    },
    /// Toggle a task between done and backlog.
    Done { id: String },
    /// Delete a task.
    Remove { id: String },
    /// Make a task the focus: move it to doing and park the rest.
    Activate { id: String },
}
