//! # VIN Decoder
//!
//! Deterministic, offline decoding of 17-character Vehicle Identification
//! Numbers into structured vehicle records, served over a small Axum JSON API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - VIN value type, segment split and the pure decoding pipeline
//! - **Application Layer** ([`application`]) - Lookup service with memoization
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and no-op caches
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Manufacturer, model year, engine, drivetrain and paint decoding
//! - Deterministic condition, history and registration heuristics
//! - Optional Redis memoization keyed by VIN and reference year
//! - Batch decoding, rate limiting and structured logging
//!
//! ## Library use
//!
//! ```ignore
//! let record = vin_decoder::VinDecoder::new(2026)
//!     .lookup("WVWZZZ1JZXW000001")?
//!     .expect("Volkswagen is tabulated");
//! assert_eq!(record.country_of_origin, "Germany");
//!
//! assert!(vin_decoder::validate_structure("WVWZZZ1JZXW000001"));
//! assert_eq!(vin_decoder::format_for_display("WVWZZZ1JZXW000001"), "WVW-ZZZ1JZ-XW000001");
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//! cargo run
//! curl http://localhost:3000/api/vin/WVWZZZ1JZXW000001
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use domain::decoding::VinDecoder;
pub use domain::decoding::lookup::lookup;
pub use domain::entities::VehicleRecord;
pub use domain::vin::{InvalidVinFormat, Vin, format_for_display, validate_structure};
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::VinService;
    pub use crate::domain::decoding::{ModelCatalog, VinDecoder};
    pub use crate::domain::entities::{VehicleRecord, VehicleStatus};
    pub use crate::domain::vin::{InvalidVinFormat, Vin};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
