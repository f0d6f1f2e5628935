use std::fmt;
use thiserror::Error;

/// Which of the two time-of-day inputs a time error refers to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TimeField {
    Start,
    End,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Start => write!(f, "startTime"),
            TimeField::End => write!(f, "endTime"),
        }
    }
}

/// Rejected field input. The draft keeps its previous value.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DraftError {
    #[error("invalid passenger count: {0:?}")]
    InvalidPassengerCount(String),

    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}

/// Failure reported by a `RideService`.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ServiceError {
    #[error("ride service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("ride service request failed: {0}")]
    Transport(String),

    #[error("ride service response is not JSON: {0}")]
    InvalidBody(String),
}

/// Errors surfaced by the submit lifecycle.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SubmitError {
    #[error("malformed {field} input: {value:?}")]
    MalformedTimeInput { field: TimeField, value: String },

    #[error("failed to create ride: {0}")]
    SubmissionFailed(#[from] ServiceError),
}
