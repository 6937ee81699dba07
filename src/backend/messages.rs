use std::fmt;

use crate::domain::CandidateId;

/// What the login form submits.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// What a successful authentication returns.
#[derive(Debug, Clone)]
pub struct Session {
    pub display_name: String,
}

/// Acknowledgement for a delivered connection request.
#[derive(Debug, Clone)]
pub struct PingReceipt {
    pub candidate_id: CandidateId,
    pub candidate_name: String,
}

/// Error surface of the backend boundary.
///
/// The mock never produces these; they exist so callers are already written
/// against the failure modes a real client will have.
#[derive(Debug, Clone)]
pub enum BackendError {
    /// The service could not be reached
    Unreachable(String),
    /// The service answered with a rejection
    Rejected(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Unreachable(msg) => write!(f, "Service unreachable: {}", msg),
            BackendError::Rejected(msg) => write!(f, "Request rejected: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}
