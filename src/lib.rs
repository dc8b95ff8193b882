//! # Taskpad Architecture
//!
//! Taskpad is a task-tracking **library** with a thin CLI client on top.
//! The layering mirrors that split and should guide where new code goes:
//!
//! ```text
//! CLI layer (main.rs, args.rs)
//!   - Parses arguments, renders tables, prints messages
//!   - The ONLY place that knows about stdout/stderr/exit codes
//!          │
//!          ▼
//! API layer (api.rs)
//!   - Thin facade over commands, returns structured Result types
//!          │
//!          ▼
//! Command layer (commands/*.rs)
//!   - Business logic per operation: add, remove, edit, filter, list
//!   - Operates on Rust types, no I/O assumptions whatsoever
//!          │
//!          ▼
//! Storage layer (store/)
//!   - Abstract TaskStore trait
//!   - FileStore (production), InMemoryStore (testing)
//! ```
//!
//! Storage is whole-list: every command loads the full task list, computes
//! a new one, and saves it back. There is no incremental update and no
//! locking; the tool assumes a single invocation at a time.
//!
//! A save failure is not fatal. Commands catch it and report it as an
//! error-level [`commands::CmdMessage`]; the CLI prints the message and the
//! process still exits 0.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::Task`] data type
//! - [`table`]: Box-drawing table renderer for task lists
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
pub mod table;
