//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the SchoolRegistrar application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{RegistrarError, Result};
use crate::utils::helpers::truncate_text;

/// Initialize logging based on configuration
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// must be kept alive for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "school_registrar.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let json = config.format == "json";
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout));
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| RegistrarError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {} ({})", config.level, config.format);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a state machine transition
pub fn log_transition(user_id: i64, from: &str, to: &str) {
    debug!(
        user_id = user_id,
        from = from,
        to = to,
        "Conversation state changed"
    );
}

/// Log rejected user input
///
/// The reason may quote the user's text, so it is cut to a sane length.
pub fn log_validation_failure(user_id: i64, state: &str, reason: &str) {
    info!(
        user_id = user_id,
        state = state,
        reason = %truncate_text(reason, 200),
        "User input rejected"
    );
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation failed"
        );
    }
}

/// Log errors that were turned into a generic reply for the user
pub fn log_handler_error(user_id: i64, context: &str, err: &RegistrarError) {
    if err.is_recoverable() {
        warn!(
            user_id = user_id,
            context = context,
            severity = %err.severity(),
            error = %err,
            "Recoverable error while handling update"
        );
    } else {
        error!(
            user_id = user_id,
            context = context,
            severity = %err.severity(),
            error = %err,
            "Error while handling update"
        );
    }
}
