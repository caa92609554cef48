//! Authentication and authorization error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication and authorization errors
///
/// Every variant is a per-request, recoverable outcome; nothing here is fatal
/// to the process. The boundary layer turns these into HTTP responses via
/// [`AuthError::status_code`] and [`AuthError::disposition`].
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthError {
    /// Invalid credentials provided. Covers both an unknown username and a
    /// wrong password so callers cannot enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A stored password hash could not be parsed. This is a data integrity
    /// problem on our side, not a user mistake; it is logged for operators
    /// and shown to the user as an ordinary login failure.
    #[error("Stored password hash is unreadable: {message}")]
    HashFormat { message: String },

    /// The session payload failed identity validation (tampered, stale, or
    /// schema-mismatched). The holder forfeits the whole session.
    #[error("Corrupt session payload: {message}")]
    CorruptSession { message: String },

    /// No valid session identity for a route that requires one
    #[error("Not authenticated")]
    Unauthenticated,

    /// Authenticated but the identity lacks the required role
    #[error("Access denied: {reason}")]
    Forbidden { reason: String },

    /// Credential store I/O failure
    #[error("Credential store error: {message}")]
    Store { message: String },

    /// Configuration errors
    #[error("Authentication configuration error: {message}")]
    Configuration { message: String },
}

/// What the route layer should do with a failed auth outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Send the visitor to the login entry point (303)
    RedirectToLogin,
    /// Render the access-denied view with the error's reason (403)
    RenderForbidden,
    /// Re-render the login form with a generic failure message (401)
    LoginFailure,
    /// Operational failure; render a generic error page (500)
    ServerError,
}

impl AuthError {
    /// Get the error code for logs and API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::HashFormat { .. } => "HASH_FORMAT_ERROR",
            AuthError::CorruptSession { .. } => "CORRUPT_SESSION",
            AuthError::Unauthenticated => "UNAUTHENTICATED",
            AuthError::Forbidden { .. } => "FORBIDDEN",
            AuthError::Store { .. } => "STORE_ERROR",
            AuthError::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }

    /// Get HTTP status code for the error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 401,
            AuthError::HashFormat { .. } => 401, // user sees a plain login failure
            AuthError::CorruptSession { .. } => 401,
            AuthError::Unauthenticated => 401,
            AuthError::Forbidden { .. } => 403,
            AuthError::Store { .. } => 500,
            AuthError::Configuration { .. } => 500,
        }
    }

    /// How the boundary should answer the request
    pub fn disposition(&self) -> Disposition {
        match self {
            AuthError::InvalidCredentials | AuthError::HashFormat { .. } => {
                Disposition::LoginFailure
            }
            AuthError::CorruptSession { .. } | AuthError::Unauthenticated => {
                Disposition::RedirectToLogin
            }
            AuthError::Forbidden { .. } => Disposition::RenderForbidden,
            AuthError::Store { .. } | AuthError::Configuration { .. } => Disposition::ServerError,
        }
    }

    /// Create a hash-format error
    pub fn hash_format(message: impl Into<String>) -> Self {
        Self::HashFormat {
            message: message.into(),
        }
    }

    /// Create a corrupt-session error
    pub fn corrupt_session(message: impl Into<String>) -> Self {
        Self::CorruptSession {
            message: message.into(),
        }
    }

    /// Create a forbidden error with a human-readable reason
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }

    /// Create a store error
    pub fn store_error(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        Self::store_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.error_code(),
            "INVALID_CREDENTIALS"
        );
        assert_eq!(
            AuthError::hash_format("bad phc").error_code(),
            "HASH_FORMAT_ERROR"
        );
        assert_eq!(AuthError::forbidden("nope").error_code(), "FORBIDDEN");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::Unauthenticated.status_code(), 401);
        assert_eq!(AuthError::corrupt_session("bad").status_code(), 401);
        assert_eq!(AuthError::forbidden("nope").status_code(), 403);
        assert_eq!(AuthError::store_error("down").status_code(), 500);
    }

    #[test]
    fn test_dispositions() {
        assert_eq!(
            AuthError::Unauthenticated.disposition(),
            Disposition::RedirectToLogin
        );
        assert_eq!(
            AuthError::corrupt_session("bad").disposition(),
            Disposition::RedirectToLogin
        );
        assert_eq!(
            AuthError::forbidden("nope").disposition(),
            Disposition::RenderForbidden
        );
        // A broken stored hash must look like a normal failed login to the user
        assert_eq!(
            AuthError::hash_format("bad phc").disposition(),
            Disposition::LoginFailure
        );
        assert_eq!(
            AuthError::InvalidCredentials.disposition(),
            Disposition::LoginFailure
        );
    }

    #[test]
    fn test_error_display() {
        let err = AuthError::forbidden("requires administrator privileges");
        assert_eq!(
            err.to_string(),
            "Access denied: requires administrator privileges"
        );

        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
