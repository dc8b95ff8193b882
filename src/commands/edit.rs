use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::TaskStore;

use super::helpers::save_or_report;

/// Overwrite tags and/or priority for every matched id. Task text and ids
/// never change; unmatched ids are silently ignored.
pub fn run<S: TaskStore>(
    store: &mut S,
    ids: &[String],
    priority: Option<String>,
    tags: Option<String>,
) -> Result<CmdResult> {
    let mut tasks = store.load()?;

    for task in tasks.iter_mut().filter(|t| ids.contains(&t.id)) {
        if let Some(tags) = &tags {
            task.tags = tags.clone();
        }
        if let Some(priority) = &priority {
            task.priority = priority.clone();
        }
    }

    let mut result = CmdResult::default();
    save_or_report(store, &tasks, &mut result);
    Ok(result)
}
