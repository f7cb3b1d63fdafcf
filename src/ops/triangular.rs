//! Triangular part extraction.
//!
//! Each function copies one triangle of a square input into a freshly allocated dense matrix and
//! fills the rest with the semiring zero. The input is only read; no symmetry is assumed or checked.

use crate::core::traits::{MatrixGet, Semiring};
use crate::error::LinalgResult;
use crate::utils::validation::require_square;
use faer::Mat;

/// Entries with `j <= i` copied, zero elsewhere.
pub fn lower_triangular<M, T>(x: &M) -> LinalgResult<Mat<T>>
where
    M: MatrixGet<T> + ?Sized,
    T: Semiring,
{
    extract(x, |i, j| j <= i)
}

/// Entries with `j >= i` copied, zero elsewhere.
pub fn upper_triangular<M, T>(x: &M) -> LinalgResult<Mat<T>>
where
    M: MatrixGet<T> + ?Sized,
    T: Semiring,
{
    extract(x, |i, j| j >= i)
}

/// Entries with `j < i` copied; the diagonal is zeroed too.
pub fn strictly_lower_triangular<M, T>(x: &M) -> LinalgResult<Mat<T>>
where
    M: MatrixGet<T> + ?Sized,
    T: Semiring,
{
    extract(x, |i, j| j < i)
}

/// Entries with `j > i` copied; the diagonal is zeroed too.
pub fn strictly_upper_triangular<M, T>(x: &M) -> LinalgResult<Mat<T>>
where
    M: MatrixGet<T> + ?Sized,
    T: Semiring,
{
    extract(x, |i, j| j > i)
}

fn extract<M, T>(x: &M, keep: impl Fn(usize, usize) -> bool) -> LinalgResult<Mat<T>>
where
    M: MatrixGet<T> + ?Sized,
    T: Semiring,
{
    require_square(x)?;
    let n = x.nrows();
    Ok(Mat::from_fn(n, n, |i, j| if keep(i, j) { x.get(i, j) } else { T::zero() }))
}
