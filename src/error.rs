use chrono::NaiveDate;
use thiserror::Error;

/// A booking request that failed one of the front desk's preconditions.
///
/// Each variant names the first check that failed so the caller can render
/// a specific message instead of a generic rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no room with number {0}")]
    UnknownRoom(String),
    #[error("room {0} is occupied")]
    RoomOccupied(String),
    #[error("guest name must not be empty")]
    EmptyGuestName,
    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidStay {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    #[error("no service with id {0}")]
    UnknownService(String),
    #[error("amount must not be negative")]
    NegativeAmount,
}

#[derive(Error, Debug)]
pub enum DeskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("malformed command: {0}")]
    Command(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;
