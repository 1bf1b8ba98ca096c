//! Session layer for taskflow.
//!
//! This crate composes the task store with the transient view filters and the
//! deletion workflow, and exposes the [`Session`] façade the renderer talks
//! to.

pub mod filter;
pub mod projector;
pub mod session;
pub mod workflow;

// Re-exports for convenience
pub use filter::{FilterState, StatusFilter};
pub use projector::visible_tasks;
pub use session::Session;
pub use workflow::{DeletionTarget, DeletionWorkflow};
