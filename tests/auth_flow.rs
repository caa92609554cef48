//! End-to-end authentication flows over in-memory stores
//!
//! Each test walks the same path a browser would: hit a route, follow the
//! boundary's redirect decisions, log in, and land somewhere.

use portero::config::RedirectConfig;
use portero::flow::{self, SeeOther};
use portero::identity::{CredentialRecord, ROLE_ADMIN, ROLE_USER};
use portero::session::{MemorySession, IDENTITY_KEY};
use portero::store::MemoryCredentialStore;
use portero::traits::{PasswordHasher as _, SessionStore};
use portero::utils::Argon2Hasher;
use portero::{
    optional_identity, require_admin, require_authenticated, AuthError, Disposition,
    PasswordAuthenticator,
};

fn test_authenticator() -> PasswordAuthenticator<MemoryCredentialStore, Argon2Hasher> {
    let hasher = Argon2Hasher::development();
    let store = MemoryCredentialStore::new()
        .with_record(CredentialRecord {
            username: "admin".to_string(),
            name: "Ana Admin".to_string(),
            password_hash: hasher.hash_password("admin-pass").unwrap(),
            email: Some("ana@example.com".to_string()),
            role: ROLE_ADMIN.to_string(),
        })
        .with_record(CredentialRecord {
            username: "maria".to_string(),
            name: "María García".to_string(),
            password_hash: hasher.hash_password("maria-pass").unwrap(),
            email: None,
            role: ROLE_USER.to_string(),
        });
    PasswordAuthenticator::with_hasher(store, hasher)
}

#[tokio::test]
async fn admin_route_admits_admin_and_rejects_user() {
    let auth = test_authenticator();
    let redirect = RedirectConfig::default();

    // Admin logs in and opens the admin panel
    let mut session = MemorySession::new();
    flow::login(&mut session, &auth, "admin", "admin-pass", &redirect)
        .await
        .unwrap();
    let identity = require_authenticated(&mut session, "/admin")
        .and_then(require_admin)
        .unwrap();
    assert_eq!(identity.role, ROLE_ADMIN);

    // A regular user on the same route gets a 403 with the reason
    let mut session = MemorySession::new();
    flow::login(&mut session, &auth, "maria", "maria-pass", &redirect)
        .await
        .unwrap();
    let err = require_authenticated(&mut session, "/admin")
        .and_then(require_admin)
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.disposition(), Disposition::RenderForbidden);
    assert_eq!(
        err.to_string(),
        "Access denied: requires administrator privileges"
    );
}

#[tokio::test]
async fn anonymous_visitor_returns_to_the_page_they_wanted() {
    let auth = test_authenticator();
    let redirect = RedirectConfig::default();
    let mut session = MemorySession::new();

    // Anonymous request to /profile: 401, boundary sends them to /login
    let err = require_authenticated(&mut session, "/profile").unwrap_err();
    assert_eq!(err, AuthError::Unauthenticated);
    assert_eq!(err.disposition(), Disposition::RedirectToLogin);

    // Login succeeds and lands back on /profile, not the default target
    let outcome = flow::login(&mut session, &auth, "maria", "maria-pass", &redirect)
        .await
        .unwrap();
    assert_eq!(outcome.redirect, SeeOther::to("/profile"));

    // /profile now renders
    let identity = require_authenticated(&mut session, "/profile").unwrap();
    assert_eq!(identity.name, "María García");
}

#[tokio::test]
async fn duplicate_login_submission_falls_back_to_default() {
    let auth = test_authenticator();
    let redirect = RedirectConfig::default();
    let mut session = MemorySession::new();

    require_authenticated(&mut session, "/dashboard/reportes").unwrap_err();

    let first = flow::login(&mut session, &auth, "maria", "maria-pass", &redirect)
        .await
        .unwrap();
    assert_eq!(first.redirect.location, "/dashboard/reportes");

    // The browser re-submits the form; the continuation was already consumed
    let second = flow::login(&mut session, &auth, "maria", "maria-pass", &redirect)
        .await
        .unwrap();
    assert_eq!(second.redirect.location, "/dashboard");
}

#[tokio::test]
async fn recorded_external_target_cannot_hijack_the_login() {
    let auth = test_authenticator();
    let redirect = RedirectConfig::default();
    let mut session = MemorySession::new();

    // Attacker-supplied ?next= value on the login page
    flow::login_page_visited(&mut session, Some("http://evil.example/x"));

    let outcome = flow::login(&mut session, &auth, "maria", "maria-pass", &redirect)
        .await
        .unwrap();
    assert_eq!(outcome.redirect.location, "/dashboard");
}

#[tokio::test]
async fn tampered_session_forces_reauthentication() {
    let auth = test_authenticator();
    let redirect = RedirectConfig::default();
    let mut session = MemorySession::new();

    flow::login(&mut session, &auth, "maria", "maria-pass", &redirect)
        .await
        .unwrap();

    // Client rewrites its identity payload out of bounds
    session.set(
        IDENTITY_KEY,
        serde_json::json!({"username": "x", "name": "", "role": "admin"}),
    );

    let err = require_authenticated(&mut session, "/dashboard").unwrap_err();
    assert_eq!(err, AuthError::Unauthenticated);
    // The forged payload is gone and the home page sees an anonymous visitor
    assert!(optional_identity(&session).is_none());

    // Re-authentication restores the real role
    let outcome = flow::login(&mut session, &auth, "maria", "maria-pass", &redirect)
        .await
        .unwrap();
    assert_eq!(outcome.identity.role, ROLE_USER);
    assert_eq!(outcome.redirect.location, "/dashboard");
}

#[tokio::test]
async fn logout_ends_the_session_everywhere() {
    let auth = test_authenticator();
    let redirect = RedirectConfig::default();
    let mut session = MemorySession::new();

    flow::login(&mut session, &auth, "admin", "admin-pass", &redirect)
        .await
        .unwrap();
    assert!(optional_identity(&session).is_some());

    let see_other = flow::logout(&mut session, &redirect);
    assert_eq!(see_other, SeeOther::to("/"));

    assert!(optional_identity(&session).is_none());
    let err = require_authenticated(&mut session, "/dashboard").unwrap_err();
    assert_eq!(err, AuthError::Unauthenticated);
}
