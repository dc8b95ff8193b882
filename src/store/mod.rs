//! # Storage Layer
//!
//! The [`TaskStore`] trait is the persistence seam for taskpad. The store
//! holds the whole task list as one unit: `load` reads everything, `save`
//! overwrites everything. There are no per-task operations because nothing
//! in the tool needs them.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON file whose path
//!   is passed in at construction
//! - [`memory::InMemoryStore`]: in-memory storage for tests, with a switch
//!   to make saves fail so the recovery path can be exercised
//!
//! ## Recovery contract
//!
//! `load` must yield an empty list (not an error) when the backing data is
//! absent, empty, or undecodable. "No tasks yet" and "store file missing"
//! are the same state from the caller's point of view.

use crate::error::Result;
use crate::model::Task;

pub mod fs;
pub mod memory;

/// Abstract interface for task persistence.
pub trait TaskStore {
    /// Read the full task list. Absent or unreadable data yields an empty
    /// list rather than an error.
    fn load(&self) -> Result<Vec<Task>>;

    /// Overwrite the persisted list with `tasks`.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}
