//! Backend-delegated decompositions.
//!
//! This module defines the `DenseBackend` seam and the routines built on it: Cholesky factorization and
//! numerical rank via singular values.

pub mod backend;
pub mod cholesky;
pub mod rank;

pub use backend::{DenseBackend, FaerBackend, SvdFactors, Triangle};
pub use cholesky::{cholesky, cholesky_with};
pub use rank::{rank, rank_with};
