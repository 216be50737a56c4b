//! Board columns and task priorities.
//!
//! Both enums serialize as lowercase strings. `Column` accepts the retired
//! `todo` and `next` lane names as aliases for `backlog`, and `Priority`
//! offers a lenient [`Priority::from_label`] for labels coming off the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

/// A workflow stage on the board.
///
/// ```text
/// backlog → doing (WIP ≤ 2) → review (WIP ≤ 2) → done
/// ```
///
/// Any column may move to any other column; the only constraint is the WIP
/// ceiling of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    #[serde(alias = "todo", alias = "next")]
    Backlog,
    Doing,
    Review,
    Done,
}

impl Column {
    /// All columns in board order.
    pub const ALL: [Self; 4] = [Self::Backlog, Self::Doing, Self::Review, Self::Done];

    /// Maximum number of tasks the column may hold, if bounded.
    #[must_use]
    pub const fn wip_limit(self) -> Option<usize> {
        match self {
            Self::Doing | Self::Review => Some(2),
            Self::Backlog | Self::Done => None,
        }
    }

    /// Whether tasks in this column are candidates for "what next".
    #[must_use]
    pub const fn is_workable(self) -> bool {
        matches!(self, Self::Backlog)
    }

    /// Human-facing column title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Doing => "Doing",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Doing => "doing",
            Self::Review => "review",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backlog" | "todo" | "next" => Ok(Self::Backlog),
            "doing" => Ok(Self::Doing),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            other => Err(CoreError::Validation(format!("unknown column '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Declared or inferred urgency of a task.
///
/// Ordering follows the score: `none < low < med < high`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    None,
    Low,
    #[serde(alias = "medium")]
    Med,
    High,
}

impl Priority {
    /// Cycling order used by the priority toggle.
    pub const CYCLE: [Self; 4] = [Self::None, Self::Low, Self::Med, Self::High];

    /// Rank used for candidate ordering.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Med => 2,
            Self::Low => 1,
            Self::None => 0,
        }
    }

    /// Parse a label, treating anything unrecognized as [`Priority::None`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// The next priority in the manual cycle, wrapping `high` back to `none`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Low,
            Self::Low => Self::Med,
            Self::Med => Self::High,
            Self::High => Self::None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Med => "med",
            Self::High => "high",
        }
    }
}

/// Score a raw priority label; unknown labels score like `none`.
#[must_use]
pub fn score_label(label: &str) -> u8 {
    Priority::from_label(label).score()
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "med" | "medium" => Ok(Self::Med),
            "high" => Ok(Self::High),
            other => Err(CoreError::Validation(format!("unknown priority '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(column_backlog, Column, Column::Backlog, "backlog");
    test_serde_roundtrip!(column_review, Column, Column::Review, "review");
    test_serde_roundtrip!(priority_med, Priority, Priority::Med, "med");
    test_serde_roundtrip!(priority_none, Priority, Priority::None, "none");

    #[test]
    fn legacy_column_names_deserialize_as_backlog() {
        let todo: Column = serde_json::from_str("\"todo\"").unwrap();
        let next: Column = serde_json::from_str("\"next\"").unwrap();
        assert_eq!(todo, Column::Backlog);
        assert_eq!(next, Column::Backlog);
    }

    #[test]
    fn wip_limits() {
        assert_eq!(Column::Backlog.wip_limit(), None);
        assert_eq!(Column::Doing.wip_limit(), Some(2));
        assert_eq!(Column::Review.wip_limit(), Some(2));
        assert_eq!(Column::Done.wip_limit(), None);
    }

    #[test]
    fn only_backlog_is_workable() {
        let workable: Vec<Column> = Column::ALL.into_iter().filter(|c| c.is_workable()).collect();
        assert_eq!(workable, vec![Column::Backlog]);
    }

    #[test]
    fn column_from_str_accepts_aliases() {
        assert_eq!("TODO".parse::<Column>().unwrap(), Column::Backlog);
        assert_eq!(" doing ".parse::<Column>().unwrap(), Column::Doing);
        assert!("archived".parse::<Column>().is_err());
    }

    #[test]
    fn scores_strictly_decrease() {
        let order = [Priority::High, Priority::Med, Priority::Low, Priority::None];
        for pair in order.windows(2) {
            assert!(pair[0].score() > pair[1].score());
        }
        assert_eq!(Priority::High.score(), 3);
        assert_eq!(Priority::None.score(), 0);
    }

    #[test]
    fn unknown_labels_score_as_none() {
        assert_eq!(score_label("critical"), Priority::None.score());
        assert_eq!(score_label(""), 0);
        assert_eq!(score_label("HIGH"), 3);
        assert_eq!(Priority::from_label("whatever"), Priority::None);
    }

    #[test]
    fn cycle_wraps_around() {
        let mut p = Priority::None;
        for expected in [Priority::Low, Priority::Med, Priority::High, Priority::None] {
            p = p.next();
            assert_eq!(p, expected);
        }
    }

    #[test]
    fn ordering_matches_score() {
        assert!(Priority::High > Priority::Med);
        assert!(Priority::Low > Priority::None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Column::Doing), "doing");
        assert_eq!(format!("{}", Priority::Med), "med");
        assert_eq!(Column::Review.title(), "Review");
    }
}
