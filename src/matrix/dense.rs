//! Dense-matrix buffer API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for the `faer::Mat<T>` type,
//! converting to and from raw column-major storage with an explicit leading dimension, which is the
//! layout factorization backends consume.

use crate::core::traits::{MatShape, Semiring};
use faer::Mat;

/// Conversion between `faer::Mat` and strided column-major buffers.
pub trait DenseMatrix<T>: MatShape {
    /// Construct from column-major storage where column `j` starts at `data[j * lda]`.
    fn from_col_major(nrows: usize, ncols: usize, lda: usize, data: &[T]) -> Self;

    /// Copy into a zero-padded column-major buffer of `lda * ncols` elements.
    fn to_col_major(&self, lda: usize) -> Vec<T>;
}

impl<T: Semiring> DenseMatrix<T> for Mat<T> {
    fn from_col_major(nrows: usize, ncols: usize, lda: usize, data: &[T]) -> Self {
        assert!(lda >= nrows, "leading dimension {lda} smaller than row count {nrows}");
        Mat::from_fn(nrows, ncols, |i, j| data[j * lda + i])
    }

    fn to_col_major(&self, lda: usize) -> Vec<T> {
        let (nrows, ncols) = (self.nrows(), self.ncols());
        assert!(lda >= nrows, "leading dimension {lda} smaller than row count {nrows}");
        let mut buf = vec![T::zero(); lda * ncols];
        for j in 0..ncols {
            for i in 0..nrows {
                buf[j * lda + i] = self[(i, j)];
            }
        }
        buf
    }
}
