use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::TaskStore;

use super::helpers::save_or_report;

pub fn run<S: TaskStore>(store: &mut S, ids: &[String]) -> Result<CmdResult> {
    let tasks: Vec<_> = store
        .load()?
        .into_iter()
        .filter(|t| !ids.contains(&t.id))
        .collect();

    let mut result = CmdResult::default();
    save_or_report(store, &tasks, &mut result);
    Ok(result)
}
