//! Database service layer
//!
//! This module provides a high-level interface to database operations

use std::time::Duration;
use crate::database::{DatabasePool, StudentRepository};
use crate::database::connection::{create_pool, init_schema};
use crate::utils::errors::RegistrarError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub students: StudentRepository,
    pool: DatabasePool,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool, timeout: Duration) -> Self {
        Self {
            students: StudentRepository::new(pool.clone(), timeout),
            pool,
        }
    }

    /// Open the configured database and make sure the schema exists
    pub async fn connect(config: &crate::config::DatabaseConfig) -> Result<Self, RegistrarError> {
        let pool = create_pool(&config.into()).await?;
        init_schema(&pool).await?;

        Ok(Self::new(pool, config.timeout()))
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
