//! Redirect-continuation protocol
//!
//! When an unauthenticated visitor is turned away from a protected route,
//! the path they asked for is recorded in the session; the next successful
//! login consumes it exactly once and lands them back where they were
//! headed. Only one pending target is tracked per session, last writer wins.

use serde_json::Value;

use crate::session::REDIRECT_KEY;
use crate::traits::SessionStore;

/// Record the path to return to after the next successful login
pub fn record_target(session: &mut dyn SessionStore, path: &str) {
    session.set(REDIRECT_KEY, Value::String(path.to_string()));
}

/// Consume the pending redirect target, falling back to `default`
///
/// Read-once: the target is removed as it is read, so a duplicate login
/// submission observes no target and falls back to `default` rather than
/// replaying a stale one. Targets that are not local paths are discarded to
/// keep the login flow from becoming an open redirect.
pub fn consume_target(session: &mut dyn SessionStore, default: &str) -> String {
    let Some(value) = session.pop(REDIRECT_KEY) else {
        return default.to_string();
    };

    match value.as_str() {
        Some(path) if is_local_path(path) => path.to_string(),
        Some(path) => {
            tracing::warn!(target = path, "discarding non-local redirect target");
            default.to_string()
        }
        None => default.to_string(),
    }
}

/// Whether a recorded target stays on this origin
///
/// `//host/x` and `/\host/x` are scheme-relative in browsers, so a leading
/// slash alone is not enough.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}
