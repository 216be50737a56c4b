//! # ghost-core
//!
//! Core types, board state model, and error types for Kanban Ghost.
//!
//! This crate provides the foundational types shared across all Kanban Ghost crates:
//! - The `Task` entity and the `Column` / `Priority` enums
//! - The `Board` with WIP-aware moves and idempotent timestamp stamping
//! - Wire types for the `/api/*` endpoints and the suggestion result
//! - Task id generation
//! - Cross-cutting error types

pub mod board;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod stamp_serde;
