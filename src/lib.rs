//! SchoolRegistrar Telegram Bot
//!
//! A Telegram bot that registers students through a short dialogue
//! (name, age, grade) and keeps the finished records in SQLite.
//! This library provides the conversation engine, the per-user session
//! table, the record store and the Telegram glue with multi-language support.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod database;
pub mod state;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{RegistrarError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::{IntakeService, ServiceFactory};
pub use state::{SessionSweeper, SessionTable};
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
