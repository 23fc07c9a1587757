//! Session table implementation
//!
//! In-memory store of conversation sessions keyed by Telegram user id.
//! Each user has a slot guarded by its own async mutex; a `SessionGuard`
//! holds that mutex for a whole conversation turn, so two messages from the
//! same user are never processed concurrently while different users never
//! wait on each other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::{debug, info, warn};
use super::context::Session;

type Slot = Arc<AsyncMutex<Option<Session>>>;

/// Per-user session table
#[derive(Clone)]
pub struct SessionTable {
    slots: Arc<Mutex<HashMap<i64, Slot>>>,
    /// Idle time after which a session is dropped
    ttl: Duration,
}

/// Exclusive access to one user's session for the duration of a turn
pub struct SessionGuard {
    user_id: i64,
    slot: OwnedMutexGuard<Option<Session>>,
}

impl SessionGuard {
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Current session, if a conversation is in progress
    pub fn get(&self) -> Option<&Session> {
        self.slot.as_ref()
    }

    /// Replace the session
    pub fn set(&mut self, session: Session) {
        debug_assert_eq!(session.user_id, self.user_id);
        *self.slot = Some(session);
    }

    /// Remove the session, returning what was there
    pub fn clear(&mut self) -> Option<Session> {
        self.slot.take()
    }
}

impl SessionTable {
    /// Create an empty session table
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Wait for exclusive access to a user's session
    ///
    /// Sessions idle for longer than the TTL are dropped on access.
    pub async fn lock(&self, user_id: i64) -> SessionGuard {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.entry(user_id).or_default().clone()
        };

        let mut guard = slot.lock_owned().await;
        if guard.as_ref().is_some_and(|session| session.is_expired(self.ttl)) {
            debug!(user_id = user_id, "Session expired, discarding");
            *guard = None;
        }

        SessionGuard { user_id, slot: guard }
    }

    /// Get a copy of a user's session
    pub async fn get(&self, user_id: i64) -> Option<Session> {
        self.lock(user_id).await.get().cloned()
    }

    /// Store a session, replacing any previous one for that user
    pub async fn set(&self, session: Session) {
        self.lock(session.user_id).await.set(session);
    }

    /// Remove a user's session
    pub async fn clear(&self, user_id: i64) {
        self.lock(user_id).await.clear();
    }

    /// Drop expired sessions and empty slots nobody is waiting on
    ///
    /// Slots in use by an in-flight turn are left alone.
    pub fn cleanup_expired(&self) -> usize {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let mut expired = 0;

        slots.retain(|user_id, slot| {
            if Arc::strong_count(slot) > 1 {
                return true;
            }

            match slot.try_lock() {
                Ok(mut guard) => {
                    if guard.as_ref().is_some_and(|session| session.is_expired(self.ttl)) {
                        debug!(user_id = *user_id, "Removing expired session");
                        *guard = None;
                        expired += 1;
                    }
                    guard.is_some()
                }
                Err(_) => true,
            }
        });

        expired
    }

    /// Number of users with a conversation in progress
    ///
    /// Users whose turn is being processed right now are counted as active.
    pub fn active_sessions(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .values()
            .filter(|slot| match slot.try_lock() {
                Ok(guard) => guard.is_some(),
                Err(_) => true,
            })
            .count()
    }
}

impl std::fmt::Debug for SessionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTable")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// Background task that periodically drops expired sessions
#[derive(Debug)]
pub struct SessionSweeper {
    table: SessionTable,
    interval: Duration,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl SessionSweeper {
    pub fn new(table: SessionTable, interval: Duration) -> Self {
        Self {
            table,
            interval,
            handle: None,
        }
    }

    /// Start the cleanup task
    pub fn start(&mut self) {
        if self.handle.is_some() {
            warn!("Session sweeper is already running");
            return;
        }

        let table = self.table.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let removed = table.cleanup_expired();
                if removed > 0 {
                    info!("Session sweeper removed {} expired sessions", removed);
                }
            }
        });

        self.handle = Some(handle);
        info!("Started session sweeper with interval {:?}", self.interval);
    }

    /// Stop the cleanup task
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Stopped session sweeper");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SessionSweeper {
    fn drop(&mut self) {
        self.stop();
    }
}
