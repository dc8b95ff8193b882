use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::TaskStore;

use super::helpers::sort_by_priority;

/// Keep tasks whose tags string contains any of `terms` as a substring.
/// Case-sensitive, no tokenization.
pub fn run<S: TaskStore>(store: &S, terms: &[String]) -> Result<CmdResult> {
    let mut tasks: Vec<_> = store
        .load()?
        .into_iter()
        .filter(|t| terms.iter().any(|term| t.tags.contains(term.as_str())))
        .collect();
    sort_by_priority(&mut tasks);

    Ok(CmdResult::default().with_listed_tasks(tasks))
}
