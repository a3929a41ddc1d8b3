//! VIN decoding pipeline.
//!
//! Each submodule owns one stage of the pipeline and is pure. [`lookup`]
//! wires them together into a [`VinDecoder`].

pub mod attributes;
pub mod catalog;
pub mod engine;
pub mod lookup;
pub mod manufacturer;
pub mod status;
pub mod synthesis;

pub use catalog::{CatalogModel, ModelCatalog, PlaceholderCatalog};
pub use lookup::VinDecoder;
pub use manufacturer::resolve_manufacturer;
