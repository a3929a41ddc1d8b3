//! Utility functions shared by the decoding pipeline.
//!
//! - [`hashing`] - Character-code sums and the 31-multiplier string hash

pub mod hashing;
