//! Intake service implementation
//!
//! Routes one inbound message to the session table, the conversation engine
//! and the student repository, and returns the replies for the user. The
//! user's session lock is held for the whole turn, commit included.

use tracing::{debug, info};
use crate::database::StudentRepository;
use crate::state::{engine, Outcome, Reply, SessionGuard, SessionTable};
use crate::utils::errors::RegistrarError;
use crate::utils::logging::{log_handler_error, log_transition, log_user_action, log_validation_failure};

/// Commands understood by the intake service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    List,
    View,
    Cancel,
}

/// Content of an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Text(String),
}

/// An inbound message from one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub user_id: i64,
    pub input: Input,
}

impl Inbound {
    pub fn command(user_id: i64, command: Command) -> Self {
        Self { user_id, input: Input::Command(command) }
    }

    pub fn text(user_id: i64, text: impl Into<String>) -> Self {
        Self { user_id, input: Input::Text(text.into()) }
    }
}

#[derive(Debug, Clone)]
pub struct IntakeService {
    sessions: SessionTable,
    students: StudentRepository,
}

impl IntakeService {
    pub fn new(sessions: SessionTable, students: StudentRepository) -> Self {
        Self { sessions, students }
    }

    pub fn sessions(&self) -> &SessionTable {
        &self.sessions
    }

    /// Process one inbound message and return the replies to send back
    pub async fn handle(&self, inbound: Inbound) -> Vec<Reply> {
        let user_id = inbound.user_id;

        let reply = match inbound.input {
            Input::Command(Command::Start) => self.start(user_id).await,
            Input::Command(Command::Help) => Reply::Help,
            Input::Command(Command::List) | Input::Command(Command::View) => self.list(user_id).await,
            Input::Command(Command::Cancel) => self.cancel(user_id).await,
            Input::Text(text) => self.answer(user_id, &text).await,
        };

        vec![reply]
    }

    async fn start(&self, user_id: i64) -> Reply {
        let mut guard = self.sessions.lock(user_id).await;
        let previous = guard.clear();

        let (session, reply) = engine::start(user_id);
        log_transition(
            user_id,
            previous.as_ref().map_or("idle", |s| s.state.as_str()),
            session.state.as_str(),
        );
        if previous.is_some() {
            debug!(user_id = user_id, "Discarded unfinished registration");
        }

        guard.set(session);
        reply
    }

    async fn list(&self, user_id: i64) -> Reply {
        log_user_action(user_id, "list_students", None);

        match self.students.list_all().await {
            Ok(students) if students.is_empty() => Reply::NoStudents,
            Ok(students) => Reply::StudentList(students),
            Err(e) => {
                log_handler_error(user_id, "list_students", &RegistrarError::from(e));
                Reply::ListFailed
            }
        }
    }

    async fn cancel(&self, user_id: i64) -> Reply {
        let mut guard = self.sessions.lock(user_id).await;

        match guard.clear() {
            Some(session) => {
                log_transition(user_id, session.state.as_str(), "idle");
                log_user_action(user_id, "cancel_registration", None);
                Reply::Cancelled
            }
            None => Reply::NothingToCancel,
        }
    }

    async fn answer(&self, user_id: i64, text: &str) -> Reply {
        let mut guard = self.sessions.lock(user_id).await;

        let Some(session) = guard.get().cloned() else {
            debug!(user_id = user_id, "Text received without an active registration");
            return Reply::UseCommands;
        };

        match engine::advance(&session, text) {
            Ok(Outcome::Advanced { session: next, reply }) => {
                log_transition(user_id, session.state.as_str(), next.state.as_str());
                guard.set(next);
                reply
            }
            Ok(Outcome::Rejected { session: kept, error, reply }) => {
                log_validation_failure(user_id, session.state.as_str(), &error.to_string());
                guard.set(kept);
                reply
            }
            Ok(Outcome::Completed { student }) => self.commit(guard, student).await,
            Err(e) => {
                log_handler_error(user_id, "advance", &e);
                guard.clear();
                Reply::InternalError
            }
        }
    }

    /// Store a finished record; the session is cleared whatever the result
    async fn commit(&self, mut guard: SessionGuard, student: crate::models::NewStudent) -> Reply {
        let user_id = guard.user_id();
        let result = self.students.append(student).await;
        guard.clear();
        log_transition(user_id, "awaiting_grade", "idle");

        match result {
            Ok(stored) => {
                info!(user_id = user_id, student_id = stored.id, "Student registered");
                Reply::Saved(stored)
            }
            Err(e) => {
                log_handler_error(user_id, "commit", &RegistrarError::from(e));
                Reply::SaveFailed
            }
        }
    }
}
