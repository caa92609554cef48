//! Password hashing utilities

use crate::{AuthError, AuthResult, PasswordHasher};
use rand::thread_rng;

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::PasswordConfig;

/// Argon2id password hasher
///
/// Produces self-describing PHC strings, so verification reads the
/// parameters and salt out of the stored hash rather than from this struct.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            memory_cost: 65536, // 64 MB
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl Argon2Hasher {
    /// Create a new Argon2 hasher with custom parameters
    pub fn new(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    /// Create a hasher from password configuration
    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(
            config.argon2_memory,
            config.argon2_iterations,
            config.argon2_parallelism,
        )
    }

    /// Create an Argon2 hasher optimized for development (faster)
    pub fn development() -> Self {
        Self {
            memory_cost: 4096, // 4 MB
            time_cost: 2,
            parallelism: 2,
        }
    }

    fn argon2(&self) -> AuthResult<Argon2<'static>> {
        let params = argon2::Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| AuthError::config_error(e.to_string()))?;
        Ok(Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash_password(&self, password: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut thread_rng());
        let password_hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::config_error(e.to_string()))?;

        Ok(password_hash.to_string())
    }

    fn verify_password(&self, password: &str, hash: &str) -> AuthResult<bool> {
        // An unparseable stored hash is a data problem, not a wrong password
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::hash_format(e.to_string()))?;

        match self
            .argon2()?
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::hash_format(e.to_string())),
        }
    }

    fn hasher_name(&self) -> &str {
        "argon2"
    }
}
