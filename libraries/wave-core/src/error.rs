/// Core error types for Wave
use thiserror::Error;

use crate::types::UserRole;

/// Result type alias using `WaveError`
pub type Result<T> = std::result::Result<T, WaveError>;

/// Broad classification of a rejected operation.
///
/// Every failure inside the engine is recovered locally and reported as a
/// message; the kind only tells callers which family the failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad reference or malformed input (unknown id, duplicate name, ...)
    Validation,
    /// Operation not valid for the current state (nothing loaded, offline, ...)
    State,
    /// Unknown username
    NotFound,
}

/// Core error type for Wave
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    /// Bad input or reference
    #[error("{0}")]
    Validation(String),

    /// Operation invalid for the current state
    #[error("{0}")]
    State(String),

    /// No user with this name exists under any role
    #[error("The username {username} doesn't exist.")]
    NotFound {
        /// Name that was looked up
        username: String,
    },

    /// The user exists, but under a different role
    #[error("{username} is not {}.", .expected.article_name())]
    WrongRole {
        /// Name that was looked up
        username: String,
        /// Role the operation required
        expected: UserRole,
    },
}

impl WaveError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a not found error
    pub fn not_found(username: impl Into<String>) -> Self {
        Self::NotFound {
            username: username.into(),
        }
    }

    /// Create a wrong role error
    pub fn wrong_role(username: impl Into<String>, expected: UserRole) -> Self {
        Self::WrongRole {
            username: username.into(),
            expected,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::State(_) => ErrorKind::State,
            Self::NotFound { .. } | Self::WrongRole { .. } => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = WaveError::not_found("alice");
        assert_eq!(err.to_string(), "The username alice doesn't exist.");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn wrong_role_message_depends_on_role() {
        assert_eq!(
            WaveError::wrong_role("bob", UserRole::Listener).to_string(),
            "bob is not a normal user."
        );
        assert_eq!(
            WaveError::wrong_role("bob", UserRole::Artist).to_string(),
            "bob is not an artist."
        );
        assert_eq!(
            WaveError::wrong_role("bob", UserRole::Host).to_string(),
            "bob is not a host."
        );
    }
}
