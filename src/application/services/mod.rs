//! Business logic services for the application layer.

pub mod vin_service;

pub use vin_service::VinService;
