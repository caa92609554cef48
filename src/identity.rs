//! Identity and credential models
//!
//! [`Identity`] is the validated, secret-free shape of an authenticated
//! principal; it is what travels through the session. [`CredentialRecord`]
//! is the at-rest row that additionally carries the password hash. The hash
//! never leaves the store boundary: converting a record into an identity
//! drops it, and nothing else in the crate touches it.

use serde::{Deserialize, Serialize};

use crate::{AuthError, AuthResult};

/// Default role assigned to freshly provisioned accounts
pub const ROLE_USER: &str = "user";

/// Role required by administrative routes
pub const ROLE_ADMIN: &str = "admin";

/// Validated, in-memory representation of an authenticated principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Unique account name, 3-50 characters
    pub username: String,

    /// Display name, 1-100 characters
    pub name: String,

    /// Contact email, if the account has one
    #[serde(default)]
    pub email: Option<String>,

    /// Authorization role, `"user"` unless provisioned otherwise
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    ROLE_USER.to_string()
}

impl Identity {
    /// Minimum username length in characters
    pub const USERNAME_MIN: usize = 3;
    /// Maximum username length in characters
    pub const USERNAME_MAX: usize = 50;
    /// Minimum display-name length in characters
    pub const NAME_MIN: usize = 1;
    /// Maximum display-name length in characters
    pub const NAME_MAX: usize = 100;

    /// Check the field constraints every identity must satisfy
    ///
    /// An identity reconstructed from a session is held to exactly the same
    /// bounds as a freshly authenticated one; a violation means the payload
    /// is corrupt, not that a looser shape is acceptable.
    pub fn validate(&self) -> AuthResult<()> {
        let username_len = self.username.chars().count();
        if username_len < Self::USERNAME_MIN || username_len > Self::USERNAME_MAX {
            return Err(AuthError::corrupt_session(format!(
                "username length {} outside {}..={}",
                username_len,
                Self::USERNAME_MIN,
                Self::USERNAME_MAX
            )));
        }

        let name_len = self.name.chars().count();
        if name_len < Self::NAME_MIN || name_len > Self::NAME_MAX {
            return Err(AuthError::corrupt_session(format!(
                "name length {} outside {}..={}",
                name_len,
                Self::NAME_MIN,
                Self::NAME_MAX
            )));
        }

        Ok(())
    }

    /// Whether this identity carries the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// Whether this identity is an administrator
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

/// At-rest credential row, owned by the credential store
///
/// Read-only from this crate's perspective: provisioning and administration
/// happen elsewhere.
#[derive(Clone, sqlx::FromRow)]
pub struct CredentialRecord {
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub role: String,
}

impl CredentialRecord {
    /// Convert into the secret-free [`Identity`], dropping the hash
    pub fn into_identity(self) -> Identity {
        Identity {
            username: self.username,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

// Manual Debug so the password hash cannot end up in logs or panic output.
impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("password_hash", &"<redacted>")
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}
