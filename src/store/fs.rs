use super::TaskStore;
use crate::error::Result;
use crate::model::Task;
use std::fs;
use std::path::PathBuf;

/// File-backed store: the whole task list as one JSON array at `path`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        // A truncated or hand-mangled file counts as "no tasks yet",
        // same as a missing one.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
