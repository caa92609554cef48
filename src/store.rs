//! Credential store implementations
//!
//! The relational store is the production backend; the in-memory store backs
//! tests and local development without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::identity::CredentialRecord;
use crate::traits::CredentialStore;
use crate::AuthResult;

/// Postgres-backed credential store
///
/// One read per authentication attempt; this crate never writes the table.
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// Create a store over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<CredentialRecord>> {
        let record = sqlx::query_as::<_, CredentialRecord>(
            "SELECT username, name, password_hash, email, role \
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}

/// In-memory credential store for tests and development
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    records: HashMap<String, CredentialRecord>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a credential record, replacing any existing one for the username
    pub fn insert(&mut self, record: CredentialRecord) {
        self.records.insert(record.username.clone(), record);
    }

    /// Builder-style insertion
    pub fn with_record(mut self, record: CredentialRecord) -> Self {
        self.insert(record);
        self
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<CredentialRecord>> {
        Ok(self.records.get(username).cloned())
    }
}
