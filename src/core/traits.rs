//! Core algebraic and matrix-access traits for krystal.

use faer::Mat;
use num_traits::Zero;
use std::ops::{Add, Mul, Sub};

/// Additive identity and addition.
pub trait Semiring: Copy + Zero + Add<Output = Self> {}

impl<T: Copy + Zero + Add<Output = T>> Semiring for T {}

/// Semiring plus subtraction and multiplication.
pub trait Ring: Semiring + Sub<Output = Self> + Mul<Output = Self> {}

impl<T: Semiring + Sub<Output = T> + Mul<Output = T>> Ring for T {}

/// Matrix dimensions.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Read access to entry `(i, j)`.
pub trait MatrixGet<T>: MatShape {
    fn get(&self, i: usize, j: usize) -> T;
}

/// Enumerates the entries a matrix considers significant.
///
/// Dense matrices yield every cell; sparse matrices yield only stored entries.
/// Any entry not produced is taken to be the element type's default.
pub trait ActiveEntries<T>: MatShape {
    /// `(row, col, value)` for every active entry.
    fn active_entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_;
}

/// Scalar times matrix, producing a fresh dense matrix.
pub trait ScaleBy<S>: MatShape {
    type Output;
    /// Compute `s · self`.
    fn scale_by(&self, s: S) -> Mat<Self::Output>;
}
