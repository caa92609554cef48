//! Session identity codec
//!
//! Encodes a validated [`Identity`] into the session's `user` key and
//! reconstructs it on later requests. Reconstruction applies the full
//! identity validation again: a payload that deserializes but violates the
//! field constraints is corruption, not an alternate valid shape.

use crate::identity::Identity;
use crate::session::IDENTITY_KEY;
use crate::traits::SessionStore;
use crate::{AuthError, AuthResult};

/// Outcome of decoding the session's identity slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedIdentity {
    /// A valid identity was present
    Present(Identity),
    /// The session carries no identity at all
    Absent,
    /// The session carries an identity payload that failed deserialization
    /// or validation. Callers must clear the entire session and treat the
    /// request as unauthenticated; a half-valid payload grants no trust.
    Corrupt,
}

/// Serialize an identity into the session
pub fn encode_identity(session: &mut dyn SessionStore, identity: &Identity) -> AuthResult<()> {
    identity.validate()?;
    let value = serde_json::to_value(identity)
        .map_err(|e| AuthError::corrupt_session(format!("identity not serializable: {}", e)))?;
    session.set(IDENTITY_KEY, value);
    Ok(())
}

/// Reconstruct and validate the identity stored in the session
pub fn decode_identity(session: &dyn SessionStore) -> DecodedIdentity {
    let Some(raw) = session.get(IDENTITY_KEY) else {
        return DecodedIdentity::Absent;
    };

    let identity = match serde_json::from_value::<Identity>(raw) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(error = %err, "session identity payload failed to deserialize");
            return DecodedIdentity::Corrupt;
        }
    };

    if let Err(err) = identity.validate() {
        tracing::warn!(error = %err, "session identity payload failed validation");
        return DecodedIdentity::Corrupt;
    }

    DecodedIdentity::Present(identity)
}
