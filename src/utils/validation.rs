//! Precondition guards on generic matrices.
//!
//! Every guard is a read-only scan that returns the first violation it finds.

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::{LinalgError, LinalgResult};
use bitflags::bitflags;
use num_traits::Float;

bitflags! {
    /// Preconditions checked by [`require`], always in the order listed.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Requirements: u8 {
        const NON_EMPTY = 0b001;
        const SQUARE    = 0b010;
        const SYMMETRIC = 0b100; // implies SQUARE
    }
}

/// Fails with `EmptyMatrix` if the matrix has no rows or no columns.
pub fn require_non_empty<M: MatShape + ?Sized>(mat: &M) -> LinalgResult<()> {
    let (rows, cols) = (mat.nrows(), mat.ncols());
    if rows == 0 || cols == 0 {
        return Err(LinalgError::EmptyMatrix { rows, cols });
    }
    Ok(())
}

/// Fails with `NotSquare` if `rows != cols`.
pub fn require_square<M: MatShape + ?Sized>(mat: &M) -> LinalgResult<()> {
    let (rows, cols) = (mat.nrows(), mat.ncols());
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    Ok(())
}

/// Requires a square matrix with `mat(i, j) == mat(j, i)` everywhere.
///
/// Pairs are visited with `j < i` in row-major order; the error names the first mismatch.
pub fn require_symmetric<M, T>(mat: &M) -> LinalgResult<()>
where
    M: MatrixGet<T> + Sync + ?Sized,
    T: PartialEq,
{
    require_symmetric_by(mat, |a, b| a == b)
}

/// Like [`require_symmetric`], but accepts `|a_ij - a_ji| <= tol * max(|a_ij|, |a_ji|)`.
pub fn require_symmetric_within<M, T>(mat: &M, tol: T) -> LinalgResult<()>
where
    M: MatrixGet<T> + Sync + ?Sized,
    T: Float + Sync,
{
    require_symmetric_by(mat, |a, b| (a - b).abs() <= tol * a.abs().max(b.abs()))
}

fn require_symmetric_by<M, T, F>(mat: &M, same: F) -> LinalgResult<()>
where
    M: MatrixGet<T> + Sync + ?Sized,
    F: Fn(T, T) -> bool + Sync,
{
    require_square(mat)?;
    let n = mat.nrows();
    let row_mismatch = |i: usize| (0..i).find(|&j| !same(mat.get(i, j), mat.get(j, i))).map(|j| (i, j));

    #[cfg(feature = "rayon")]
    let first = {
        use rayon::prelude::*;
        (1..n).into_par_iter().find_map_first(row_mismatch)
    };
    #[cfg(not(feature = "rayon"))]
    let first = (1..n).find_map(row_mismatch);

    match first {
        Some((row, col)) => Err(LinalgError::NotSymmetric { row, col }),
        None => Ok(()),
    }
}

/// Runs the guards selected by `req`: non-empty, then square, then symmetric.
pub fn require<M, T>(mat: &M, req: Requirements) -> LinalgResult<()>
where
    M: MatrixGet<T> + Sync + ?Sized,
    T: PartialEq,
{
    if req.contains(Requirements::NON_EMPTY) {
        require_non_empty(mat)?;
    }
    if req.contains(Requirements::SQUARE) {
        require_square(mat)?;
    }
    if req.contains(Requirements::SYMMETRIC) {
        require_symmetric(mat)?;
    }
    Ok(())
}
