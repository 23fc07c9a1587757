//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod student;

// Re-export repositories
pub use student::StudentRepository;
