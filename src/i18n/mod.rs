//! Internationalization module
//!
//! This module handles multi-language support for the registrar bot.
//! It provides translation loading, language detection, message formatting,
//! pluralization, and rendering of conversation replies.

pub mod loader;
pub mod render;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams};
