//! Core authentication seams
//!
//! The host application owns credential persistence and per-client session
//! state; this crate reaches both only through the traits below, which keeps
//! every operation unit-testable without a live request context.

use async_trait::async_trait;
use serde_json::Value;

use crate::identity::CredentialRecord;
use crate::AuthResult;

/// Read-only lookup into the host's credential storage
///
/// Lookups are exact and case-sensitive; whatever normalization the store
/// enforces at provisioning time is its own business.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find a credential record by exact username match
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<CredentialRecord>>;
}

/// Per-client key-value session state, persisted across requests by the host
///
/// The core owns exactly two keys in this space (the serialized identity and
/// the pending redirect target) and issues one logical operation per call.
/// Concurrent requests for the same session must be serialized by the host;
/// across sessions no ordering is required.
pub trait SessionStore: Send {
    /// Read a value without removing it
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a value, overwriting any previous one
    fn set(&mut self, key: &str, value: Value);

    /// Atomically read and remove a value
    fn pop(&mut self, key: &str) -> Option<Value>;

    /// Drop the entire session state
    fn clear(&mut self);
}

/// Password hasher seam for one-way hashing and verification
///
/// Hash tokens are self-describing PHC strings (algorithm, parameters and
/// salt embedded), so `verify_password` needs no external parameter lookup.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a PHC string
    fn hash_password(&self, password: &str) -> AuthResult<String>;

    /// Verify a plaintext password against a stored PHC string
    ///
    /// A mismatch is `Ok(false)`; an unreadable stored hash is
    /// [`AuthError::HashFormat`](crate::AuthError::HashFormat), never a
    /// silent non-match.
    fn verify_password(&self, password: &str, hash: &str) -> AuthResult<bool>;

    /// Get the hasher name
    fn hasher_name(&self) -> &str;
}
