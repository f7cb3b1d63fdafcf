//! Configuration: option structs for the decomposition routines.

pub mod options;
pub use options::{DecompOptions, StatusPolicy};
