//! Authentication configuration types and utilities

use serde::{Deserialize, Serialize};

/// Main authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Password hashing configuration
    pub password: PasswordConfig,

    /// Session cookie configuration
    pub session: SessionConfig,

    /// Redirect-continuation configuration
    pub redirect: RedirectConfig,
}

/// Password hashing configuration (Argon2id parameters)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Argon2 memory cost in KB
    #[serde(default = "default_argon2_memory")]
    pub argon2_memory: u32,

    /// Argon2 time cost (iterations)
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,

    /// Argon2 parallelism factor
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
}

/// Session cookie configuration
///
/// The core never touches cookies itself; these are hints the host honors
/// when it persists the opaque session identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session cookie name
    #[serde(default = "default_session_cookie_name")]
    pub cookie_name: String,

    /// Session cookie path
    #[serde(default = "default_session_cookie_path")]
    pub cookie_path: String,

    /// Session cookie secure flag
    #[serde(default = "default_false")]
    pub cookie_secure: bool,

    /// Session cookie HTTP-only flag
    #[serde(default = "default_true")]
    pub cookie_http_only: bool,

    /// Session cookie SameSite policy
    #[serde(default = "default_session_cookie_same_site")]
    pub cookie_same_site: String,
}

/// Redirect-continuation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectConfig {
    /// Login entry point the boundary redirects unauthenticated visitors to
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Where a successful login lands when no continuation target is pending
    #[serde(default = "default_target")]
    pub default_target: String,

    /// Public entry point used after logout
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

// Default value functions
fn default_argon2_memory() -> u32 {
    65536
} // 64MB
fn default_argon2_iterations() -> u32 {
    3
}
fn default_argon2_parallelism() -> u32 {
    4
}
fn default_session_cookie_name() -> String {
    "portero_session".to_string()
}
fn default_session_cookie_path() -> String {
    "/".to_string()
}
fn default_session_cookie_same_site() -> String {
    "Lax".to_string()
}
fn default_login_path() -> String {
    "/login".to_string()
}
fn default_target() -> String {
    "/dashboard".to_string()
}
fn default_home_path() -> String {
    "/".to_string()
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            argon2_memory: default_argon2_memory(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_session_cookie_name(),
            cookie_path: default_session_cookie_path(),
            cookie_secure: default_false(),
            cookie_http_only: default_true(),
            cookie_same_site: default_session_cookie_same_site(),
        }
    }
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            default_target: default_target(),
            home_path: default_home_path(),
        }
    }
}

impl AuthConfig {
    /// Create a development configuration (fast hashing, HTTP allowed)
    pub fn development() -> Self {
        let mut config = Self::default();
        config.password.argon2_memory = 4096;
        config.password.argon2_iterations = 2;
        config.password.argon2_parallelism = 2;
        config.session.cookie_secure = false;
        config
    }

    /// Create a production configuration with strict cookie settings
    pub fn production() -> Self {
        let mut config = Self::default();
        config.session.cookie_secure = true;
        config.session.cookie_same_site = "Strict".to_string();
        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.password.argon2_memory < 1024 {
            return Err("Argon2 memory cost must be at least 1024 KB".to_string());
        }

        if self.password.argon2_iterations == 0 || self.password.argon2_parallelism == 0 {
            return Err("Argon2 iterations and parallelism must be non-zero".to_string());
        }

        if !["Strict", "Lax", "None"].contains(&self.session.cookie_same_site.as_str()) {
            return Err("Invalid session cookie SameSite policy".to_string());
        }

        for (field, path) in [
            ("login_path", &self.redirect.login_path),
            ("default_target", &self.redirect.default_target),
            ("home_path", &self.redirect.home_path),
        ] {
            if !path.starts_with('/') {
                return Err(format!("Redirect {} must be a local path", field));
            }
        }

        Ok(())
    }
}
