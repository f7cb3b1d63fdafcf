//! krystal: generic dense matrix utilities over Faer
//!
//! This crate provides Cholesky factorization, numerical rank, triangular extraction, Kronecker and
//! cross products, and tie-aware ranking. Element types are constrained by algebraic capabilities
//! (`Semiring`, `Ring`, `Ord`) rather than fixed to floats, and factorizations are delegated to a
//! pluggable `DenseBackend` (faer by default).

pub mod config;
pub mod core;
pub mod decomposition;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod utils;

// Re-exports for convenience
pub use crate::config::{DecompOptions, StatusPolicy};
pub use crate::core::traits::{ActiveEntries, MatShape, MatrixGet, Ring, ScaleBy, Semiring};
pub use crate::decomposition::*;
pub use crate::error::{LinalgError, LinalgResult};
pub use crate::matrix::{CsrMatrix, DenseMatrix};
pub use crate::ops::*;
pub use crate::utils::*;
