//! Foundation types for shellsim.
//!
//! Shared by every shellsim crate: the user-facing shell error taxonomy, the
//! host-level error type, and the per-session configuration.

pub mod config;
pub mod error;
