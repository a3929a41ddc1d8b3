//! Application layer services.
//!
//! Services sit between HTTP handlers and the pure domain layer, adding
//! caching and reference-year resolution.
//!
//! # Available Services
//!
//! - [`services::vin_service::VinService`] - VIN lookup with memoization

pub mod services;
