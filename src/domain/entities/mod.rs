//! Core domain entities produced by the decoding pipeline.
//!
//! Entities are plain data structures without decoding logic. Every value is
//! constructed fresh per decode call and handed to the caller.
//!
//! # Entity Types
//!
//! - [`ManufacturerInfo`] - Manufacturer resolved from the WMI
//! - [`EngineSpec`] - Engine variant for a manufacturer/engine code
//! - [`VehicleStatus`] - Condition and provenance heuristics
//! - [`VehicleRecord`] - The flat aggregate returned to callers

pub mod vehicle;

pub use vehicle::{
    AccidentStatus, Condition, DamageStatus, DriveType, EngineSpec, FuelType, ManufacturerInfo,
    Region, Transmission, VehicleRecord, VehicleStatus,
};
