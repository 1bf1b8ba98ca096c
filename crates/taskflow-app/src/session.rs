use time::Date;
use tracing::debug;

use taskflow_core::{
    AddTaskError, Category, Priority, Task, TaskCounts, TaskDraft, TaskId, TaskList,
};

use crate::filter::{FilterState, StatusFilter};
use crate::projector;
use crate::workflow::DeletionWorkflow;

/// One interactive session: task data, view filters, and the deletion gate.
///
/// The three concerns have independent lifecycles and live in separate
/// structures; this façade wires them together and is the only surface the
/// renderer consumes. All operations are synchronous; each one either fully
/// applies or is a no-op.
#[derive(Debug, Default)]
pub struct Session {
    tasks: TaskList,
    filter: FilterState,
    deletion: DeletionWorkflow,
}

impl Session {
    /// Start an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task from the given fields; `None` due date means today.
    ///
    /// # Errors
    /// Returns [`AddTaskError::EmptyText`] when the text is blank after
    /// trimming; nothing is created.
    pub fn add_task(
        &mut self,
        text: &str,
        priority: Priority,
        category: Category,
        due: Option<Date>,
    ) -> Result<TaskId, AddTaskError> {
        let mut draft = TaskDraft::new(text).priority(priority).category(category);
        if let Some(due) = due {
            draft = draft.due_on(due);
        }
        let id = self.tasks.add(draft)?;
        debug!(%id, %priority, %category, "task added");
        Ok(id)
    }

    /// Flip a task's completed flag; unknown ids are a no-op.
    ///
    /// Returns whether a task was found.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let found = self.tasks.toggle(id);
        if found {
            debug!(%id, "task toggled");
        }
        found
    }

    /// Ask to delete a task, capturing its text for the confirmation prompt.
    ///
    /// The task list is not touched. A request made while another deletion is
    /// pending overwrites it. Returns `false` (no-op) for unknown ids.
    pub fn request_delete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.get(id) else {
            return false;
        };
        self.deletion.request(id, task.text.clone());
        debug!(%id, "deletion requested");
        true
    }

    /// Carry out the pending deletion, returning the removed task.
    ///
    /// `None` when no deletion is pending.
    pub fn confirm_delete(&mut self) -> Option<Task> {
        let target = self.deletion.confirm()?;
        let removed = self.tasks.remove(target.id);
        if let Some(task) = &removed {
            debug!(id = %task.id, "task deleted");
        }
        removed
    }

    /// Abandon the pending deletion, leaving the task list unchanged.
    pub fn cancel_delete(&mut self) {
        if self.deletion.is_pending() {
            debug!("deletion cancelled");
        }
        self.deletion.cancel();
    }

    /// Replace the status filter.
    pub const fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.set_status(status);
    }

    /// Replace the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.set_search(text);
    }

    /// Drop the search text.
    pub fn clear_search(&mut self) {
        self.filter.clear_search();
    }

    /// The projection: visible tasks under the active filters, recomputed on
    /// every call.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        projector::visible_tasks(&self.tasks, &self.filter)
    }

    /// Total/completed/pending counts over the whole list.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        self.tasks.counts()
    }

    /// Active view filters.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current deletion workflow state, for rendering the prompt.
    #[must_use]
    pub const fn deletion(&self) -> &DeletionWorkflow {
        &self.deletion
    }

    /// The unfiltered task list.
    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Number of tasks, ignoring filters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the session holds no tasks, ignoring filters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
