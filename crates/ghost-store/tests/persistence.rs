//! Board persistence against a real temp directory.

use chrono::Utc;
use ghost_core::board::Board;
use ghost_core::enums::{Column, Priority};
use ghost_store::{BoardStore, StoreError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> BoardStore {
    BoardStore::in_dir(dir.path(), "kg_tasks")
}

#[test]
fn missing_file_loads_seed_board() {
    let dir = TempDir::new().unwrap();
    let board = store_in(&dir).load().unwrap();
    assert_eq!(board, Board::seed());
    assert!(!store_in(&dir).path().exists());
}

#[test]
fn save_then_load_preserves_tasks_and_focus() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let now = Utc::now();

    let mut board = Board::seed();
    let added = board.add("fix login bug", Priority::High, false, now).unwrap();
    board.set_active(&added.id, now).unwrap();
    store.save(&board).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, board);
    assert_eq!(loaded.active_id.as_deref(), Some(added.id.as_str()));
    assert_eq!(loaded.get(&added.id).unwrap().column, Column::Doing);
}

#[test]
fn save_creates_missing_data_dir() {
    let dir = TempDir::new().unwrap();
    let store = BoardStore::in_dir(&dir.path().join("nested").join("deeper"), "work");
    store.save(&Board::seed()).unwrap();
    assert!(store.path().exists());
    assert!(!store.path().with_extension("json.tmp").exists());
}

#[test]
fn legacy_bare_array_from_browser_storage_loads() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        r#"[
            {"id":"t1","text":"Set up project","col":"todo","priority":"none"},
            {"id":"t2","text":"Design ghost UI","col":"doing","priority":"med","startedAt":1717000000000}
        ]"#,
    )
    .unwrap();

    let board = store.load().unwrap();
    assert_eq!(board.tasks.len(), 2);
    assert_eq!(board.tasks[0].column, Column::Backlog);
    assert_eq!(
        board.tasks[1].started_at.map(|t| t.timestamp_millis()),
        Some(1_717_000_000_000)
    );
    assert!(board.active_id.is_none());

    // re-saving upgrades to the object form
    store.save(&board).unwrap();
    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(raw.trim_start().starts_with('{'));
    assert!(!raw.contains("todo"));
}

#[test]
fn corrupt_file_is_an_error_not_a_reseed() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "{ not json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Json { .. }));
    assert!(err.to_string().contains("kg_tasks.json"));
}

#[test]
fn dangling_active_id_is_cleared() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        r#"{"tasks":[{"id":"a","text":"x","column":"backlog"}],"active_id":"gone"}"#,
    )
    .unwrap();

    let board = store.load().unwrap();
    assert!(board.active_id.is_none());
    assert_eq!(board.tasks[0].priority, Priority::None);
}
