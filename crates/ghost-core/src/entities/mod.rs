//! Entity structs for Kanban Ghost domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for the
//! persisted board slot and the HTTP wire format.

mod task;

pub use task::Task;
