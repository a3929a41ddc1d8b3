//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod decode_batch;
pub mod fallback;
pub mod health;
pub mod vin;

pub use decode_batch::decode_batch_handler;
pub use fallback::fallback_handler;
pub use health::health_handler;
pub use vin::{lookup_handler, validate_handler};
