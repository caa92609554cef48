//! Username/password authentication provider
//!
//! Composes a [`CredentialStore`] lookup with a [`PasswordHasher`] check and
//! hands back the secret-free [`Identity`] on success. One store read, no
//! other side effects, and the plaintext password is never logged on any
//! path.

use crate::identity::Identity;
use crate::traits::{CredentialStore, PasswordHasher};
use crate::utils::Argon2Hasher;
use crate::{AuthError, AuthResult};

/// Authenticator over a credential store and a password hasher
#[derive(Debug, Clone)]
pub struct PasswordAuthenticator<S, H = Argon2Hasher> {
    store: S,
    hasher: H,
}

impl<S: CredentialStore> PasswordAuthenticator<S> {
    /// Create an authenticator with the default Argon2 hasher
    pub fn new(store: S) -> Self {
        Self {
            store,
            hasher: Argon2Hasher::default(),
        }
    }
}

impl<S, H> PasswordAuthenticator<S, H>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    /// Create an authenticator with a specific hasher
    pub fn with_hasher(store: S, hasher: H) -> Self {
        Self { store, hasher }
    }

    /// Authenticate a username/plaintext-password pair
    ///
    /// An unknown username and a wrong password produce the identical
    /// [`AuthError::InvalidCredentials`], so a caller probing the login form
    /// learns nothing about which accounts exist. An unreadable stored hash
    /// is surfaced as [`AuthError::HashFormat`] after an operator-facing log
    /// event; the boundary shows the user the same generic login failure.
    pub async fn authenticate(&self, username: &str, password: &str) -> AuthResult<Identity> {
        let Some(record) = self.store.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        match self.hasher.verify_password(password, &record.password_hash) {
            Ok(true) => Ok(record.into_identity()),
            Ok(false) => Err(AuthError::InvalidCredentials),
            Err(err) => {
                tracing::error!(
                    username,
                    error = %err,
                    "stored password hash is unreadable"
                );
                Err(err)
            }
        }
    }

    /// Get provider name for identification
    pub fn provider_name(&self) -> &str {
        "password"
    }
}
