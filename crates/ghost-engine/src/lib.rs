//! # ghost-engine
//!
//! The suggestion engine behind Kanban Ghost.
//!
//! - [`priority`]: keyword-based priority inference for new tasks
//! - [`selector`]: workable-candidate filtering and ranking
//! - [`intent`]: question vs. action classification
//! - [`planner`]: three concrete micro-steps for a task
//! - [`compose`]: the plan message format and fixed phrases
//! - [`responder`]: offline conversational replies
//! - [`collaborator`]: provider traits and the timeout/fallback wrapper
//! - [`engine`]: the state machine tying them together

pub mod collaborator;
pub mod compose;
pub mod engine;
pub mod intent;
pub mod planner;
pub mod priority;
pub mod responder;
pub mod selector;

pub use collaborator::{CollaboratorError, ConversationalResponder, SuggestionProvider};
pub use engine::{EngineConfig, SuggestionEngine};
