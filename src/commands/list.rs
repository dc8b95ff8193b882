use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TaskStore;

use super::helpers::sort_by_priority;

pub const NO_TASKS_HINT: &str = "No tasks. Add one with 'taskpad add <task>'";

pub fn run<S: TaskStore>(store: &S) -> Result<CmdResult> {
    let mut tasks = store.load()?;
    if tasks.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(NO_TASKS_HINT));
        return Ok(result);
    }

    sort_by_priority(&mut tasks);
    Ok(CmdResult::default().with_listed_tasks(tasks))
}
