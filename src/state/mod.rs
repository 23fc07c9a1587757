//! State management module
//!
//! This module handles conversation state, the registration state machine,
//! and the per-user session table

pub mod context;
pub mod engine;
pub mod storage;

// Re-export commonly used state components
pub use context::{ConversationState, PartialStudent, Session};
pub use engine::{Outcome, Reply};
pub use storage::{SessionGuard, SessionSweeper, SessionTable};
