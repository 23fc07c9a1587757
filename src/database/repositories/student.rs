//! Student repository implementation
//!
//! Append-only store of finished intakes. Ids come from SQLite
//! `AUTOINCREMENT`, so they are never reused.

use std::future::Future;
use std::time::{Duration, Instant};
use sqlx::SqlitePool;
use crate::models::student::{Student, NewStudent};
use crate::utils::errors::{StorageError, StorageResult};
use crate::utils::logging::log_database_operation;

/// SQLite primary result codes for a lock that could not be taken in time
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;

#[derive(Clone)]
#[derive(Debug)]
pub struct StudentRepository {
    pool: SqlitePool,
    timeout: Duration,
}

impl StudentRepository {
    /// `timeout` must match the pool's acquire and busy timeouts
    pub fn new(pool: SqlitePool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Store a finished intake and return it with its assigned id
    ///
    /// The insert runs in its own transaction and is bounded only by the
    /// pool's acquire timeout and SQLite's busy timeout. Either the row is
    /// committed and its id returned, or nothing is written.
    pub async fn append(&self, student: NewStudent) -> StorageResult<Student> {
        let started = Instant::now();

        let result = async {
            let mut tx = self.pool.begin().await?;

            let id = sqlx::query(
                r#"
                INSERT INTO students (name, age, grade)
                VALUES (?, ?, ?)
                "#
            )
            .bind(&student.name)
            .bind(i64::from(student.age))
            .bind(&student.grade)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

            tx.commit().await?;
            Ok::<_, sqlx::Error>(id)
        }
        .await
        .map_err(|e| self.classify(e));

        log_database_operation(
            "INSERT",
            "students",
            started.elapsed().as_millis() as u64,
            result.is_ok(),
        );

        Ok(student.into_student(result?))
    }

    /// List every stored student ordered by id
    pub async fn list_all(&self) -> StorageResult<Vec<Student>> {
        self.timed_read("SELECT", async {
            let students = sqlx::query_as::<_, Student>(
                "SELECT id, name, age, grade FROM students ORDER BY id ASC"
            )
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.classify(e))?;

            Ok::<_, StorageError>(students)
        })
        .await
    }

    /// Run a read-only query under the configured timeout and log its outcome
    async fn timed_read<T, F>(&self, operation: &str, query: F) -> StorageResult<T>
    where
        F: Future<Output = StorageResult<T>>,
    {
        let started = Instant::now();
        let result = match tokio::time::timeout(self.timeout, query).await {
            Ok(result) => result,
            Err(_) => Err(StorageError::Timeout(self.timeout)),
        };

        log_database_operation(
            operation,
            "students",
            started.elapsed().as_millis() as u64,
            result.is_ok(),
        );
        result
    }

    /// Map lock and pool waits that ran out of time to `StorageError::Timeout`
    fn classify(&self, err: sqlx::Error) -> StorageError {
        let timed_out = match &err {
            sqlx::Error::PoolTimedOut => true,
            sqlx::Error::Database(db_err) => db_err
                .code()
                .and_then(|code| code.parse::<i32>().ok())
                .is_some_and(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED)),
            _ => false,
        };

        if timed_out {
            StorageError::Timeout(self.timeout)
        } else {
            StorageError::Database(err)
        }
    }
}
