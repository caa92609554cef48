//! Session identity codec and redirect continuation
//!
//! The session itself belongs to the host request layer; this module owns
//! the two keys the core stores in it and everything about their contents.

pub mod codec;
pub mod redirect;

use std::collections::HashMap;

use serde_json::Value;

use crate::traits::SessionStore;

/// Session key holding the serialized identity
pub const IDENTITY_KEY: &str = "user";

/// Session key holding the pending post-login redirect target
pub const REDIRECT_KEY: &str = "redirect_after_login";

// Re-exports for convenience
pub use codec::{decode_identity, encode_identity, DecodedIdentity};
pub use redirect::{consume_target, record_target};

/// In-memory session for tests and for hosts that keep session state
/// server-side behind their own persistence.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    values: HashMap<String, Value>,
}

impl MemorySession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the session holds no state at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn pop(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_session_contract() {
        let mut session = MemorySession::new();
        assert!(session.is_empty());
        assert_eq!(session.get("missing"), None);

        session.set("k", json!("v1"));
        session.set("k", json!("v2"));
        assert_eq!(session.get("k"), Some(json!("v2")));

        assert_eq!(session.pop("k"), Some(json!("v2")));
        assert_eq!(session.pop("k"), None);

        session.set("a", json!(1));
        session.set("b", json!(2));
        session.clear();
        assert!(session.is_empty());
    }
}
