//! Derivation of the visible task list from store state plus view filters.

use taskflow_core::{Task, TaskList};

use crate::filter::FilterState;

/// Compute the currently visible tasks.
///
/// Pure inclusion filter: a task appears iff it passes the status predicate
/// AND the search predicate. Stored (newest-first) order is preserved; there
/// is no scoring or re-sorting. An empty result is a valid state; the
/// renderer consults [`FilterState::search_active`] to pick its empty-state
/// message.
#[must_use]
pub fn visible_tasks<'a>(list: &'a TaskList, filter: &FilterState) -> Vec<&'a Task> {
    let matcher = filter.matcher();
    list.iter()
        .filter(|task| filter.status().accepts(task.completed))
        .filter(|task| matcher.as_ref().is_none_or(|m| m.matches(task)))
        .collect()
}
