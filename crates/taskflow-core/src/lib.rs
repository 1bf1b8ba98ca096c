//! Domain types and the in-memory task store for taskflow sessions.

/// Identifier types.
pub mod id;
/// Ordered task collection and primitive mutations.
pub mod list;
/// Task entity, priority, and category definitions.
pub mod task;
/// Search text matching.
pub mod text_matcher;

pub use id::TaskId;
pub use list::{AddTaskError, TaskCounts, TaskList};
pub use task::{Category, ParsePriorityError, Priority, Task, TaskDraft};
pub use text_matcher::TextMatcher;
