//! Serde roundtrip and JsonSchema validation tests for the persisted and wire types.

use chrono::Utc;
use ghost_core::board::Board;
use ghost_core::entities::Task;
use ghost_core::enums::{Column, Priority};
use ghost_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    task_roundtrip,
    Task,
    Task {
        id: "0b6f6c1e-4a65-4c1f-9d4e-1c2b3a4d5e6f".into(),
        text: "fix login bug".into(),
        column: Column::Review,
        priority: Priority::High,
        started_at: Some(Utc::now()),
        reviewed_at: Some(Utc::now()),
        finished_at: None,
    }
);

roundtrip_and_validate!(board_roundtrip, Board, {
    let mut board = Board::seed();
    board.active_id = Some("t2".into());
    board
});

roundtrip_and_validate!(
    suggestion_result_roundtrip,
    SuggestionResult,
    SuggestionResult {
        task_id: Some("a".into()),
        message: "Focus on: fix bug.\nThen:\n1) a\n2) b\n3) c".into(),
        route: Route::Plan,
        source: Some(PickSource::Heuristic),
    }
);

roundtrip_and_validate!(
    caught_up_roundtrip,
    SuggestionResult,
    SuggestionResult {
        task_id: None,
        message: "You're all caught up. Nice!".into(),
        route: Route::CaughtUp,
        source: None,
    }
);

roundtrip_and_validate!(
    suggest_request_roundtrip,
    SuggestRequest,
    SuggestRequest {
        tasks: vec![WireTask {
            id: "a".into(),
            text: "read book".into(),
            priority: Some("low".into()),
            column: Some("backlog".into()),
        }],
    }
);

roundtrip_and_validate!(
    ask_request_roundtrip,
    AskRequest,
    AskRequest {
        text: "how do I start?".into(),
        board_state: Some(BoardState {
            backlog_count: 4,
            doing_count: 1,
            done_today: 2,
        }),
    }
);

roundtrip_and_validate!(
    summary_roundtrip,
    TaskSummary,
    TaskSummary::from(&Task::new("b", "plan trip", Priority::Low))
);

roundtrip_and_validate!(
    metrics_roundtrip,
    BoardMetrics,
    BoardMetrics {
        throughput_7d: 3,
        avg_cycle_time_days: 1.5,
    }
);

roundtrip_and_validate!(
    priority_response_roundtrip,
    PriorityResponse,
    PriorityResponse {
        priority: Priority::Med,
    }
);

#[test]
fn board_from_browser_storage_normalizes_todo() {
    let json = r#"{
        "tasks": [
            {"id": "t1", "text": "Set up project", "col": "todo", "priority": "none"},
            {"id": "t2", "text": "Design ghost UI", "col": "doing", "priority": "med"}
        ]
    }"#;
    let board: Board = serde_json::from_str(json).unwrap();
    assert_eq!(board.tasks[0].column, Column::Backlog);
    assert!(board.active_id.is_none());

    let saved = serde_json::to_string(&board).unwrap();
    assert!(saved.contains("\"column\":\"backlog\""));
    assert!(!saved.contains("todo"));
}
