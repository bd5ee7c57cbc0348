use std::fmt;

use billed_store::StoreError;
use thiserror::Error;

/// How a failed remote call is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    NotFound,
    ServerError,
    Unknown,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::NotFound => "not_found",
            FetchErrorKind::ServerError => "server_error",
            FetchErrorKind::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FetchErrorKind::NotFound => "Not Found",
            FetchErrorKind::ServerError => "Server Error",
            FetchErrorKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

pub(crate) fn classify(e: &StoreError) -> FetchErrorKind {
    match e {
        StoreError::NotFound(_) => FetchErrorKind::NotFound,
        StoreError::Server(_) => FetchErrorKind::ServerError,
        StoreError::InvalidInput(_) | StoreError::Transport(_) => FetchErrorKind::Unknown,
    }
}

/// A listing fetch that failed: the classification plus a readable
/// message for the error banner. Returned as a value, never thrown.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl From<StoreError> for FetchError {
    fn from(e: StoreError) -> Self {
        FetchError {
            kind: classify(&e),
            message: e.to_string(),
        }
    }
}

/// Why a submission did not go through.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("no validated attachment staged")]
    MissingAttachment,

    #[error("a submission is already in flight")]
    SubmissionInProgress,

    #[error("draft was already submitted; build a new one")]
    AlreadySubmitted,

    #[error("{kind}: {message}")]
    Transport { kind: FetchErrorKind, message: String },
}

impl From<StoreError> for SubmissionError {
    fn from(e: StoreError) -> Self {
        SubmissionError::Transport {
            kind: classify(&e),
            message: e.to_string(),
        }
    }
}

/// Why a review decision was not persisted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("only admins may review bills")]
    NotAllowed,

    #[error("bill has no identifier")]
    MissingId,

    #[error("{kind}: {message}")]
    Transport { kind: FetchErrorKind, message: String },
}

impl From<StoreError> for ReviewError {
    fn from(e: StoreError) -> Self {
        ReviewError::Transport {
            kind: classify(&e),
            message: e.to_string(),
        }
    }
}
