use crate::commands::{CmdMessage, CmdResult};
use crate::model::Task;
use crate::store::TaskStore;
use std::collections::HashSet;

/// Smallest non-negative integer (as a string) not already used as an id.
/// Linear probe from 0, so ids freed by removal get reused.
pub fn next_id(tasks: &[Task]) -> String {
    let used: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    let mut candidate: u64 = 0;
    while used.contains(candidate.to_string().as_str()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// Descending lexical priority order: `"9" > "2" > "10"` as strings.
/// Deliberate; single-digit priorities are the intended usage.
pub fn sort_by_priority(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
}

/// Save, reporting failure as a message instead of an error. A failed save
/// loses this run's mutation but must not crash the tool.
pub fn save_or_report<S: TaskStore>(store: &mut S, tasks: &[Task], result: &mut CmdResult) {
    if let Err(e) = store.save(tasks) {
        result.add_message(CmdMessage::error(
            "An error occurred while attempting to save your data. \
             Changes may not have been saved.",
        ));
        result.add_message(CmdMessage::error(e.to_string()));
    }
}
