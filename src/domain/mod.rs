//! Domain layer: VIN value type, segment splitting and the decoding pipeline.
//!
//! Nothing in this layer performs I/O or reads the clock except
//! [`decoding::VinDecoder::current`], which picks up the current year.
//!
//! # Architecture
//!
//! - [`vin`] - Validated VIN value type and display formatting
//! - [`segments`] - WMI / VDS / VIS split and model-year decoding
//! - [`entities`] - Decoded vehicle data structures
//! - [`decoding`] - Manufacturer, attribute, status and synthetic-field decoders

pub mod decoding;
pub mod entities;
pub mod segments;
pub mod vin;
