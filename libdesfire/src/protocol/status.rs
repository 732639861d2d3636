// libdesfire/src/protocol/status.rs

use crate::constants::status;
use crate::{Error, StatusError};

/// Result of classifying one status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The logical response is complete.
    Success,
    /// More frames follow; fetch them with ADDITIONAL_FRAME.
    Continue,
    /// The command failed; the whole operation is void.
    Failure(Failure),
}

/// Failing status, either documented or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Status(StatusError),
    UnknownStatus(u8),
}

impl From<Failure> for Error {
    fn from(f: Failure) -> Self {
        match f {
            Failure::Status(kind) => Error::Status(kind),
            Failure::UnknownStatus(code) => Error::UnknownStatus(code),
        }
    }
}

/// Classify a status byte. Undocumented bytes are never treated as success.
pub fn classify(code: u8) -> Outcome {
    match code {
        status::OPERATION_OK => Outcome::Success,
        status::ADDITIONAL_FRAME => Outcome::Continue,
        other => match StatusError::from_code(other) {
            Some(kind) => Outcome::Failure(Failure::Status(kind)),
            None => Outcome::Failure(Failure::UnknownStatus(other)),
        },
    }
}
