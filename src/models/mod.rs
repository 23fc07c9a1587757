//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod student;

// Re-export commonly used models
pub use student::{Student, NewStudent};
