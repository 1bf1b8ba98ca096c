use taskflow_core::TaskId;

/// Target captured when a deletion is requested, echoed in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionTarget {
    /// Identifier of the task the user asked to delete.
    pub id: TaskId,
    /// Task text at request time, for display in the confirmation prompt.
    pub text: String,
}

/// Two-state machine gating task removal behind an explicit confirmation.
///
/// Requesting a deletion never touches the task list; only a confirm hands
/// the captured target back to the caller, which performs the removal. There
/// is no timeout; a pending request stays pending until confirmed or
/// cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeletionWorkflow {
    /// No deletion in flight.
    #[default]
    Idle,
    /// Waiting for the user to confirm or cancel.
    Pending(DeletionTarget),
}

impl DeletionWorkflow {
    /// Whether a deletion is awaiting confirmation.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The captured target, while pending.
    #[must_use]
    pub const fn pending_target(&self) -> Option<&DeletionTarget> {
        match self {
            Self::Idle => None,
            Self::Pending(target) => Some(target),
        }
    }

    /// Capture a deletion target. A request made while another is pending
    /// overwrites it: last request wins, nothing queues.
    pub fn request(&mut self, id: TaskId, text: impl Into<String>) {
        *self = Self::Pending(DeletionTarget {
            id,
            text: text.into(),
        });
    }

    /// Hand back the captured target and return to idle.
    ///
    /// Returns `None` while idle (a stray confirm is a no-op).
    pub fn confirm(&mut self) -> Option<DeletionTarget> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Pending(target) => Some(target),
        }
    }

    /// Discard any pending target without removing anything. No-op while idle.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
