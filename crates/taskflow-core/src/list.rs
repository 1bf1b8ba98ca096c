use thiserror::Error;
use time::{Date, OffsetDateTime};

use crate::id::TaskId;
use crate::task::{Task, TaskDraft};

/// Error returned when a draft cannot be accepted into the list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddTaskError {
    /// Draft text was empty or whitespace-only.
    #[error("task text is empty after trimming")]
    EmptyText,
}

/// Aggregate counts over the whole list, derived by scanning on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    /// Number of tasks in the list.
    pub total: usize,
    /// Tasks with the completed flag set.
    pub completed: usize,
    /// Tasks still open. `completed + pending == total` always.
    pub pending: usize,
}

/// Ordered, newest-first collection of tasks and the primitive mutations.
///
/// The list exclusively owns its tasks; callers only ever see `&Task`
/// borrows. Insertion order is preserved; new tasks prepend and nothing
/// re-sorts on update.
#[derive(Debug, Default, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Accept a draft: trim the text, assign the next id, and prepend.
    ///
    /// Without an explicit due date the creation day (UTC) is used.
    ///
    /// # Errors
    /// Returns [`AddTaskError::EmptyText`] when the text is empty after
    /// trimming; the list is left untouched.
    pub fn add(&mut self, draft: TaskDraft) -> Result<TaskId, AddTaskError> {
        let text = draft.text.trim();
        if text.is_empty() {
            return Err(AddTaskError::EmptyText);
        }

        let id = TaskId::new(self.next_id);
        self.next_id += 1;

        self.tasks.insert(
            0,
            Task {
                id,
                text: text.to_owned(),
                completed: false,
                priority: draft.priority,
                category: draft.category,
                due: draft.due.unwrap_or_else(today),
            },
        );
        Ok(id)
    }

    /// Flip the completed flag of the matching task.
    ///
    /// Returns whether a task was found; an unknown id is a no-op, not an
    /// error.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .is_some_and(|task| {
                task.completed = !task.completed;
                true
            })
    }

    /// Remove and return the matching task; `None` when absent.
    ///
    /// Not reachable from the renderer directly; removal goes through the
    /// deletion workflow's confirm step.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Iterate tasks in stored (newest-first) order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Number of tasks in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Derive total/completed/pending counts by scanning the list.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskCounts {
            total: self.tasks.len(),
            completed,
            pending: self.tasks.len() - completed,
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
