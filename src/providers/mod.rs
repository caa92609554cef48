//! Authentication provider implementations

pub mod password;

// Re-exports for convenience
pub use password::PasswordAuthenticator;
