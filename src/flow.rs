//! Login and logout flows
//!
//! Orchestrates the pieces into the two session-mutating operations the
//! route layer exposes, and hands back typed HTTP directives (303 redirects)
//! instead of building responses itself.

use crate::config::RedirectConfig;
use crate::identity::Identity;
use crate::providers::password::PasswordAuthenticator;
use crate::session::codec::encode_identity;
use crate::session::redirect::{consume_target, record_target};
use crate::traits::{CredentialStore, PasswordHasher, SessionStore};
use crate::AuthResult;

/// A 303 See Other directive for the route layer to honor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeeOther {
    /// Where the response should send the browser
    pub location: String,
}

impl SeeOther {
    /// HTTP status the boundary uses for these redirects
    pub const STATUS: u16 = 303;

    /// Create a redirect directive
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// The freshly authenticated identity, as stored in the session
    pub identity: Identity,
    /// Where to send the browser: the consumed continuation target, or the
    /// configured default when none was pending
    pub redirect: SeeOther,
}

/// Process a login submission
///
/// Authenticates, stores the identity in the session, and consumes the
/// pending redirect-continuation target exactly once. A failure propagates
/// the authentication error untouched; the session is not modified on
/// failure, so the pending target survives for the retry.
pub async fn login<S, H>(
    session: &mut dyn SessionStore,
    authenticator: &PasswordAuthenticator<S, H>,
    username: &str,
    password: &str,
    redirect: &RedirectConfig,
) -> AuthResult<LoginOutcome>
where
    S: CredentialStore,
    H: PasswordHasher,
{
    let identity = authenticator.authenticate(username, password).await?;
    encode_identity(session, &identity)?;
    let target = consume_target(session, &redirect.default_target);

    tracing::debug!(username = %identity.username, target = %target, "login succeeded");
    Ok(LoginOutcome {
        identity,
        redirect: SeeOther::to(target),
    })
}

/// Note an explicit continuation target from a login-page visit
///
/// Covers the `/login?next=/somewhere` case: visiting the login form with an
/// explicit target records it through the same protocol the guards use.
pub fn login_page_visited(session: &mut dyn SessionStore, next: Option<&str>) {
    if let Some(next) = next {
        record_target(session, next);
    }
}

/// Terminate the session
///
/// Clears everything the session held and sends the browser to the public
/// entry point.
pub fn logout(session: &mut dyn SessionStore, redirect: &RedirectConfig) -> SeeOther {
    session.clear();
    SeeOther::to(redirect.home_path.clone())
}
