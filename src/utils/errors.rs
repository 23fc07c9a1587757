//! Error handling for SchoolRegistrar
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use std::time::Duration;
use thiserror::Error;

/// Main error type for SchoolRegistrar application
#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Record store errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),
}

/// User input that does not fit the current conversation step
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age must be a non-negative whole number, got {0:?}")]
    InvalidAge(String),

    #[error("grade must not be empty")]
    EmptyGrade,
}

/// Result type alias for SchoolRegistrar operations
pub type Result<T> = std::result::Result<T, RegistrarError>;

/// Result type alias for record store operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

impl From<sqlx::Error> for RegistrarError {
    fn from(err: sqlx::Error) -> Self {
        RegistrarError::Storage(StorageError::Database(err))
    }
}

impl RegistrarError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            RegistrarError::Storage(StorageError::Timeout(_)) => true,
            RegistrarError::Storage(StorageError::Database(_)) => false,
            RegistrarError::Validation(_) => true,
            RegistrarError::Telegram(_) => true,
            RegistrarError::Config(_) => false,
            RegistrarError::InvalidStateTransition { .. } => false,
            RegistrarError::Serialization(_) => false,
            RegistrarError::Io(_) => true,
            RegistrarError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RegistrarError::Storage(_) => ErrorSeverity::Critical,
            RegistrarError::Config(_) => ErrorSeverity::Critical,
            RegistrarError::Validation(_) => ErrorSeverity::Info,
            RegistrarError::InvalidInput(_) => ErrorSeverity::Info,
            RegistrarError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
