//! Outcome of a recommendation submission.

use crate::types::Movie;
use thiserror::Error;

/// Result of one submit: the recommended movies, or the classified failure.
pub type SubmitOutcome = Result<Vec<Movie>, SubmitError>;

/// Why a submission produced no recommendations.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Input was empty or whitespace only. No request was sent.
    #[error("Please enter a movie preference")]
    Validation,

    /// The request exceeded the client timeout.
    #[error("Backend is waking up (takes up to 60s on free tier). Please wait and try again.")]
    Timeout,

    /// The backend answered with a non-2xx status.
    #[error("Server error: {status} - {}", .message.as_deref().unwrap_or("Unknown error"))]
    Server { status: u16, message: Option<String> },

    /// The request went out but no response came back.
    #[error("No response from server. The backend might be asleep or the URL is wrong.")]
    Network,

    /// Any other local failure building, sending, or decoding the request.
    #[error("Request error: {0}")]
    Client(String),
}

/// Discriminant of [`SubmitError`], used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Timeout,
    Server,
    Network,
    Client,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Server => "server",
            ErrorKind::Network => "network",
            ErrorKind::Client => "client",
        }
    }
}

impl SubmitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmitError::Validation => ErrorKind::Validation,
            SubmitError::Timeout => ErrorKind::Timeout,
            SubmitError::Server { .. } => ErrorKind::Server,
            SubmitError::Network => ErrorKind::Network,
            SubmitError::Client(_) => ErrorKind::Client,
        }
    }

    /// Build a server error, treating a blank message as absent.
    pub fn server(status: u16, message: Option<String>) -> Self {
        SubmitError::Server {
            status,
            message: message.filter(|m| !m.is_empty()),
        }
    }

    /// Whether the fallback list replaces the recommendations.
    ///
    /// Every failure except validation does.
    pub fn uses_fallback(&self) -> bool {
        !matches!(self, SubmitError::Validation)
    }
}
