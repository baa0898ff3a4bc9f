//! Client error types.

use std::fmt;

use tonic::{Code, Status};

/// A failed remote call: the peer's status code plus its detail string.
///
/// Raised per call and never aggregated across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    code: Code,
    message: String,
}

impl RpcError {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Status code reported by the peer (or the transport).
    pub fn code(&self) -> Code {
        self.code
    }

    /// Human-readable detail string.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {:?})", self.message, self.code)
    }
}

impl std::error::Error for RpcError {}

impl From<Status> for RpcError {
    fn from(status: Status) -> Self {
        Self::new(status.code(), status.message())
    }
}

/// Errors raised while setting up the client, before any call is made.
#[derive(Debug)]
pub enum ClientError {
    /// The configured target is not a valid endpoint URI.
    InvalidEndpoint { target: String, error: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidEndpoint { target, error } => {
                write!(f, "invalid gRPC endpoint '{}': {}", target, error)
            }
        }
    }
}

impl std::error::Error for ClientError {}
