use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::{fmt, str::FromStr};
use thiserror::Error;
use time::Date;

use crate::id::TaskId;

/// Urgency level attached to a task at creation.
///
/// No ordering semantics beyond display; the list never re-sorts by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Needs attention soon.
    High,
}

impl Priority {
    /// String representation used in configuration and CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a priority token cannot be recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(s.to_owned())),
        }
    }
}

/// Life area a task belongs to.
///
/// Unrecognized inputs degrade to [`Category::Other`] (generic icon) instead
/// of failing, so parsing is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Job-related.
    Work,
    /// Everyday life.
    #[default]
    Personal,
    /// Exercise, medical, wellbeing.
    Health,
    /// Study and skill-building.
    Learning,
    /// Anything else.
    Other,
}

impl Category {
    /// String representation used in configuration and CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Health => "health",
            Self::Learning => "learning",
            Self::Other => "other",
        }
    }

    /// Display icon for list rendering.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Work => "💼",
            Self::Personal => "🏠",
            Self::Health => "💪",
            Self::Learning => "📚",
            Self::Other => "📝",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "work" => Self::Work,
            "personal" => Self::Personal,
            "health" => Self::Health,
            "learning" => Self::Learning,
            _ => Self::Other,
        })
    }
}

/// A single to-do item owned by the task list.
///
/// Only `completed` is ever mutated after creation; text, priority, category,
/// and due date are fixed once the task is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Session-unique identifier.
    pub id: TaskId,
    /// Display text, trimmed and non-empty.
    pub text: String,
    /// Completion flag, false at creation.
    pub completed: bool,
    /// Urgency level.
    pub priority: Priority,
    /// Life area.
    pub category: Category,
    /// Due date; any date is allowed, past or future.
    pub due: Date,
}

/// Field bundle for creating a task; the id is assigned by the list.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub(crate) text: String,
    pub(crate) priority: Priority,
    pub(crate) category: Category,
    pub(crate) due: Option<Date>,
}

impl TaskDraft {
    /// Start a draft with the given text and default priority/category.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: Priority::default(),
            category: Category::default(),
            due: None,
        }
    }

    /// Set the urgency level.
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the life area.
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set an explicit due date; without one, the creation day is used.
    #[must_use]
    pub const fn due_on(mut self, due: Date) -> Self {
        self.due = Some(due);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parses_known_tokens() {
        for (token, expected) in [
            ("low", Priority::Low),
            (" Medium ", Priority::Medium),
            ("HIGH", Priority::High),
        ] {
            let parsed: Priority = token
                .parse()
                .unwrap_or_else(|err| panic!("must parse priority: {err}"));
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn priority_rejects_unknown_tokens() {
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn category_degrades_unknown_tokens_to_other() {
        let parsed: Category = "errands".parse().unwrap_or_else(|_| unreachable!());
        assert_eq!(parsed, Category::Other);
        assert_eq!(parsed.icon(), "📝");
    }

    #[test]
    fn category_parses_known_tokens() {
        let parsed: Category = "Work".parse().unwrap_or_else(|_| unreachable!());
        assert_eq!(parsed, Category::Work);
        assert_eq!(parsed.icon(), "💼");
    }

    #[test]
    fn defaults_match_the_add_form() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Category::default(), Category::Personal);
    }
}
