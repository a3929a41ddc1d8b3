//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`cache`] - Memoization of decoded records (Redis and no-op implementations)

pub mod cache;
