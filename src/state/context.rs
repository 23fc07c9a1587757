//! Conversation context management
//!
//! This module tracks where a user is in the registration dialogue and
//! which answers have been collected so far.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Position in the fixed registration question sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversationState {
    Idle,
    AwaitingName,
    AwaitingAge,
    AwaitingGrade,
}

impl ConversationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::AwaitingName => "awaiting_name",
            ConversationState::AwaitingAge => "awaiting_age",
            ConversationState::AwaitingGrade => "awaiting_grade",
        }
    }
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers collected so far; fields fill in order and are never unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialStudent {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub grade: Option<String>,
}

/// User conversation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Telegram user this session belongs to
    pub user_id: i64,
    pub state: ConversationState,
    pub collected: PartialStudent,
    /// When this session last changed
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create an idle session with nothing collected
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            state: ConversationState::Idle,
            collected: PartialStudent::default(),
            updated_at: Utc::now(),
        }
    }

    /// Check that the collected fields match the current state
    pub fn is_consistent(&self) -> bool {
        let PartialStudent { name, age, grade } = &self.collected;
        match self.state {
            ConversationState::Idle | ConversationState::AwaitingName => {
                name.is_none() && age.is_none() && grade.is_none()
            }
            ConversationState::AwaitingAge => name.is_some() && age.is_none() && grade.is_none(),
            ConversationState::AwaitingGrade => name.is_some() && age.is_some() && grade.is_none(),
        }
    }

    /// Check if the session has been idle longer than `ttl`
    pub fn is_expired(&self, ttl: std::time::Duration) -> bool {
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => Utc::now() - self.updated_at > ttl,
            Err(_) => false,
        }
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
