//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for UI
//! clients. Dispatches to `commands::*::run` and returns structured
//! `Result<CmdResult>` values; no business logic, no I/O, no presentation.
//!
//! `TaskpadApi<S: TaskStore>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::store::TaskStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct TaskpadApi<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskpadApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_task(
        &mut self,
        text: String,
        priority: Option<String>,
        tags: Option<String>,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.store, text, priority, tags)
    }

    pub fn remove_tasks(&mut self, ids: &[String]) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, ids)
    }

    pub fn edit_tasks(
        &mut self,
        ids: &[String],
        priority: Option<String>,
        tags: Option<String>,
    ) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, ids, priority, tags)
    }

    pub fn filter_tasks(&self, terms: &[String]) -> Result<CmdResult> {
        commands::filter::run(&self.store, terms)
    }

    pub fn list_tasks(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }
}
