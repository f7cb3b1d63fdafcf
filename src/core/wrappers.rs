//! Wrappers for faer dense matrix types.
//!
//! This module implements the core access traits for `faer::Mat` and `faer::MatRef`, so the
//! generic routines in `ops`, `utils` and `decomposition` accept faer matrices directly.
//!
//! # Features
//! - Shape and entry access for owned matrices and views.
//! - Dense active-entry iteration (every cell, column-major order).
//! - Scalar multiplication into a freshly allocated matrix.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{ActiveEntries, MatShape, MatrixGet, ScaleBy};
use faer::{Mat, MatRef};
use std::ops::Mul;

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<T> MatShape for MatRef<'_, T> {
    fn nrows(&self) -> usize {
        (*self).nrows()
    }
    fn ncols(&self) -> usize {
        (*self).ncols()
    }
}

impl<T: Copy> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: Copy> MatrixGet<T> for MatRef<'_, T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

/// Every cell of a dense matrix is active.
impl<T: Copy> ActiveEntries<T> for Mat<T> {
    fn active_entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let nrows = self.nrows();
        (0..self.ncols()).flat_map(move |j| (0..nrows).map(move |i| (i, j, self[(i, j)])))
    }
}

/// Computes `s · A` entrywise.
impl<T, S> ScaleBy<S> for Mat<T>
where
    T: Copy,
    S: Copy + Mul<T>,
{
    type Output = S::Output;

    fn scale_by(&self, s: S) -> Mat<S::Output> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| s * self[(i, j)])
    }
}
