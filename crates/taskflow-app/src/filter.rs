use std::fmt;

use taskflow_core::{Task, TextMatcher};

/// Which completion states the view should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every task.
    #[default]
    All,
    /// Only tasks not yet completed.
    Pending,
    /// Only completed tasks.
    Completed,
}

impl StatusFilter {
    /// String representation used for display and CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Whether a task with the given completion flag passes this filter.
    #[must_use]
    pub const fn accepts(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !completed,
            Self::Completed => completed,
        }
    }

    /// Next filter in the all → pending → completed cycle.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient view filters: status plus free-text search.
///
/// Lives and dies with the session; never stored alongside the task data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    status: StatusFilter,
    search: String,
}

impl FilterState {
    /// Start with no filtering: all tasks, blank search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active status filter.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Replace the status filter.
    pub const fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    /// Raw search text as typed.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Drop the search text.
    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Whether a non-blank search query is active. Drives the renderer's
    /// choice between "no tasks yet" and "no matching tasks" messaging.
    #[must_use]
    pub fn search_active(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Build a matcher for the current search text; `None` when blank.
    #[must_use]
    pub fn matcher(&self) -> Option<TextMatcher> {
        TextMatcher::new(&self.search)
    }

    /// Whether the given task passes both the status and search predicates.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.accepts(task.completed)
            && self.matcher().is_none_or(|matcher| matcher.matches(task))
    }
}
