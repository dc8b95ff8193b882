use super::TaskStore;
use crate::error::{Result, TaskpadError};
use crate::model::Task;

/// In-memory store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tasks: Vec<Task>,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `save` always fails, for exercising the
    /// write-failure recovery path.
    pub fn failing_saves() -> Self {
        Self {
            tasks: Vec::new(),
            fail_saves: true,
        }
    }

    /// Seed the store with an initial task list.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            fail_saves: false,
        }
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        if self.fail_saves {
            return Err(TaskpadError::Store(
                "in-memory store is set to fail saves".to_string(),
            ));
        }
        self.tasks = tasks.to_vec();
        Ok(())
    }
}
