use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Task;
use crate::store::TaskStore;

use super::helpers::{next_id, save_or_report};

const DEFAULT_PRIORITY: &str = "0";
const DEFAULT_TAGS: &str = "-";

pub fn run<S: TaskStore>(
    store: &mut S,
    text: String,
    priority: Option<String>,
    tags: Option<String>,
) -> Result<CmdResult> {
    let mut tasks = store.load()?;

    let task = Task::new(
        next_id(&tasks),
        text,
        tags.unwrap_or_else(|| DEFAULT_TAGS.to_string()),
        priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
    );
    tasks.push(task);

    let mut result = CmdResult::default();
    save_or_report(store, &tasks, &mut result);
    Ok(result)
}
