//! Authorization logic for middleware integration
//!
//! This module provides the per-request authorization checks route handlers
//! or HTTP middleware compose in front of protected routes.

pub mod guards;

// Re-exports for convenient access
pub use guards::{optional_identity, require_admin, require_authenticated, require_role};
