use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Column, Priority};

/// A single card on the board.
///
/// Each of the three timestamps is stamped once, the first time the task
/// enters the matching column, and is never overwritten afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(alias = "col")]
    pub column: Column,
    #[serde(default)]
    pub priority: Priority,
    #[serde(
        default,
        alias = "startedAt",
        deserialize_with = "crate::stamp_serde::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "reviewedAt",
        deserialize_with = "crate::stamp_serde::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "finishedAt",
        deserialize_with = "crate::stamp_serde::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl Task {
    /// A fresh backlog task with no timestamps.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            column: Column::Backlog,
            priority,
            started_at: None,
            reviewed_at: None,
            finished_at: None,
        }
    }

    /// Builder-style column override, mostly for fixtures.
    #[must_use]
    pub fn in_column(mut self, column: Column) -> Self {
        self.column = column;
        self
    }

    /// Put the task in `column`, stamping the column's timestamp if unset.
    pub(crate) fn enter(&mut self, column: Column, now: DateTime<Utc>) {
        self.column = column;
        let slot = match column {
            Column::Doing => &mut self.started_at,
            Column::Review => &mut self.reviewed_at,
            Column::Done => &mut self.finished_at,
            Column::Backlog => return,
        };
        if slot.is_none() {
            *slot = Some(now);
        }
    }

    /// Length of the text in characters, used as the quick-win tie-break.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}
