//! Registration conversation engine
//!
//! Pure state machine: given a session and one incoming text it decides the
//! next session, the reply, and whether a finished record is ready. It never
//! touches storage; the caller applies the outcome.

use crate::models::{NewStudent, Student};
use crate::utils::errors::{RegistrarError, Result, ValidationError};
use super::context::{ConversationState, PartialStudent, Session};

/// Outgoing message, rendered into text by the i18n layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    AskName,
    AskAge,
    AskGrade,
    InvalidName,
    InvalidAge,
    InvalidGrade,
    Saved(Student),
    SaveFailed,
    Help,
    StudentList(Vec<Student>),
    NoStudents,
    ListFailed,
    Cancelled,
    NothingToCancel,
    UseCommands,
    InternalError,
}

/// Result of feeding one message to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input accepted, conversation moves on
    Advanced { session: Session, reply: Reply },
    /// Input rejected; only the activity timestamp of the session moves
    Rejected { session: Session, error: ValidationError, reply: Reply },
    /// Last answer accepted; the record must be stored and the session cleared
    Completed { student: NewStudent },
}

/// Begin a fresh registration, discarding anything collected before
pub fn start(user_id: i64) -> (Session, Reply) {
    let mut session = Session::new(user_id);
    session.state = ConversationState::AwaitingName;
    (session, Reply::AskName)
}

/// Apply one incoming text to the session
pub fn advance(session: &Session, text: &str) -> Result<Outcome> {
    match session.state {
        ConversationState::Idle => Err(RegistrarError::InvalidStateTransition {
            from: ConversationState::Idle.to_string(),
            to: "text_input".to_string(),
        }),
        ConversationState::AwaitingName => {
            if text.trim().is_empty() {
                return Ok(rejected(session, ValidationError::EmptyName, Reply::InvalidName));
            }

            let mut next = session.clone();
            next.collected.name = Some(text.to_string());
            Ok(moved_to(next, ConversationState::AwaitingAge, Reply::AskAge))
        }
        ConversationState::AwaitingAge => match parse_age(text) {
            Ok(age) => {
                let mut next = session.clone();
                next.collected.age = Some(age);
                Ok(moved_to(next, ConversationState::AwaitingGrade, Reply::AskGrade))
            }
            Err(error) => Ok(rejected(session, error, Reply::InvalidAge)),
        },
        ConversationState::AwaitingGrade => {
            if text.trim().is_empty() {
                return Ok(rejected(session, ValidationError::EmptyGrade, Reply::InvalidGrade));
            }

            let student = assemble(&session.collected, text).ok_or_else(|| {
                RegistrarError::InvalidStateTransition {
                    from: session.state.to_string(),
                    to: "commit".to_string(),
                }
            })?;
            Ok(Outcome::Completed { student })
        }
    }
}

/// Parse an age: ASCII digits only, surrounding whitespace ignored
pub fn parse_age(text: &str) -> std::result::Result<u32, ValidationError> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAge(text.to_string()));
    }

    digits
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidAge(text.to_string()))
}

fn moved_to(mut session: Session, state: ConversationState, reply: Reply) -> Outcome {
    session.state = state;
    session.touch();
    Outcome::Advanced { session, reply }
}

fn rejected(session: &Session, error: ValidationError, reply: Reply) -> Outcome {
    let mut session = session.clone();
    session.touch();
    Outcome::Rejected { session, error, reply }
}

fn assemble(collected: &PartialStudent, grade: &str) -> Option<NewStudent> {
    Some(NewStudent {
        name: collected.name.clone()?,
        age: collected.age?,
        grade: grade.to_string(),
    })
}
