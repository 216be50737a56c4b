//! Task id generation.

/// Generate a new opaque task id (UUID v4, hyphenated).
#[must_use]
pub fn new_task_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
