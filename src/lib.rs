//! # portero: session authentication and role authorization
//!
//! This crate is the authentication core of a server-rendered web application:
//! it verifies credentials against stored Argon2 hashes, carries a validated
//! identity through an opaque per-request session store, gates routes by role,
//! and remembers where an unauthenticated visitor was headed so a successful
//! login can send them back there.
//!
//! The crate owns no transport. Sessions, cookies, templates and the route
//! table belong to the host; the core consumes them through the narrow
//! [`SessionStore`] and [`CredentialStore`] traits and produces typed
//! outcomes the route layer maps onto HTTP responses.

pub mod config;
pub mod error;
pub mod flow;
pub mod identity;
pub mod middleware;
pub mod providers;
pub mod session;
pub mod store;
pub mod traits;
pub mod utils;

// Error handling
pub use error::{AuthError, Disposition};

// Core models
pub use identity::{CredentialRecord, Identity, ROLE_ADMIN, ROLE_USER};

// Seams to the host application
pub use traits::{CredentialStore, PasswordHasher, SessionStore};

// Configuration
pub use config::{AuthConfig, PasswordConfig, RedirectConfig, SessionConfig};

// Authentication and authorization surface
pub use middleware::guards::{optional_identity, require_admin, require_authenticated, require_role};
pub use providers::password::PasswordAuthenticator;
pub use session::codec::{decode_identity, encode_identity, DecodedIdentity};
pub use session::redirect::{consume_target, record_target};

/// Authentication result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication system version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
