use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::{fmt, str::FromStr};

/// Identifier of a task, unique within a session.
///
/// Ids are handed out by the task list from a monotonically increasing
/// counter and are never reused or reassigned.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Numeric form of the identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_roundtrip() {
        let id = TaskId::new(42);
        let parsed: TaskId = id
            .to_string()
            .parse()
            .unwrap_or_else(|err| panic!("must parse task id: {err}"));
        assert_eq!(parsed, id);
    }

    #[test]
    fn task_id_rejects_garbage() {
        assert!("not-a-number".parse::<TaskId>().is_err());
    }
}
