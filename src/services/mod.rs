//! Services module
//!
//! This module contains business logic services

pub mod intake;

// Re-export commonly used services
pub use intake::{Command, Inbound, Input, IntakeService};

use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::state::{SessionSweeper, SessionTable};

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub intake_service: IntakeService,
    pub database: DatabaseService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings, database: DatabaseService) -> Self {
        let sessions = SessionTable::new(settings.session.ttl());
        let intake_service = IntakeService::new(sessions, database.students.clone());

        Self {
            intake_service,
            database,
        }
    }

    /// Create the background sweeper for this factory's session table
    pub fn session_sweeper(&self, settings: &Settings) -> SessionSweeper {
        SessionSweeper::new(
            self.intake_service.sessions().clone(),
            settings.session.cleanup_interval(),
        )
    }
}
