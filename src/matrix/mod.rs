//! Matrix module: dense buffer helpers and a sparse CSR container.

pub mod dense;
pub use dense::DenseMatrix;
pub mod sparse;
pub use sparse::CsrMatrix;
