//! Authorization dependency chain
//!
//! Two composable per-request checks: [`require_authenticated`] turns a
//! session into a validated [`Identity`] or an `Unauthenticated` failure,
//! and [`require_role`] gates that identity by role. The role check takes
//! the *result* of the authentication check, never the raw session, so the
//! chain is explicit and each link is unit-testable on its own.
//!
//! Per request the decision walks a small state machine with no I/O beyond
//! the session read: decode yields authenticated or unauthenticated, and an
//! authenticated identity is then either authorized or forbidden.

use crate::identity::{Identity, ROLE_ADMIN};
use crate::session::codec::{decode_identity, DecodedIdentity};
use crate::session::redirect;
use crate::traits::SessionStore;
use crate::{AuthError, AuthResult};

/// Require a valid session identity, recording the requested path for the
/// post-login redirect when there is none
///
/// A corrupt payload forfeits the whole session, not just the identity key:
/// the session is cleared before the redirect target is recorded, so nothing
/// a tampering client stored survives into the next login.
pub fn require_authenticated(
    session: &mut dyn SessionStore,
    requested_path: &str,
) -> AuthResult<Identity> {
    match decode_identity(session) {
        DecodedIdentity::Present(identity) => Ok(identity),
        DecodedIdentity::Absent => {
            redirect::record_target(session, requested_path);
            Err(AuthError::Unauthenticated)
        }
        DecodedIdentity::Corrupt => {
            session.clear();
            redirect::record_target(session, requested_path);
            Err(AuthError::Unauthenticated)
        }
    }
}

/// Require that an already-authenticated identity carries `role`
///
/// Pure comparison; composes on top of [`require_authenticated`] and never
/// re-reads the session.
pub fn require_role(identity: Identity, role: &str) -> AuthResult<Identity> {
    if identity.has_role(role) {
        Ok(identity)
    } else {
        Err(AuthError::forbidden(format!(
            "requires {} privileges",
            role_label(role)
        )))
    }
}

/// Require an administrator identity
pub fn require_admin(identity: Identity) -> AuthResult<Identity> {
    require_role(identity, ROLE_ADMIN)
}

/// Read the session identity without demanding one
///
/// For pages that render differently for signed-in visitors but are open to
/// everyone. No side effects: a corrupt payload reads as `None` here and is
/// dealt with the next time a protected route is hit.
pub fn optional_identity(session: &dyn SessionStore) -> Option<Identity> {
    match decode_identity(session) {
        DecodedIdentity::Present(identity) => Some(identity),
        DecodedIdentity::Absent | DecodedIdentity::Corrupt => None,
    }
}

fn role_label(role: &str) -> &str {
    if role == ROLE_ADMIN {
        "administrator"
    } else {
        role
    }
}
