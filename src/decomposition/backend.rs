//! Dense factorization backends.
//!
//! The decomposition routines in this crate never do factorization arithmetic themselves. They talk to a
//! `DenseBackend`, a narrow LAPACK-shaped interface with two entry points (Cholesky and SVD) plus a
//! machine-epsilon query. `FaerBackend` is the default implementation; tests substitute fakes.
//!
//! # Status codes
//! `potrf` follows the LAPACK convention:
//! - `0`: success, the buffer holds the factor.
//! - `-i`: argument `i` was invalid (`-2` order, `-3` buffer, `-4` leading dimension).
//! - `k > 0`: the leading minor of order `k` is not positive definite.
//!
//! # References
//! - Faer documentation: https://github.com/sarah-ek/faer-rs
//! - LAPACK Users' Guide, xPOTRF and xLAMCH

use crate::error::{LinalgError, LinalgResult};
use faer::linalg::cholesky::llt::factor::LltError;
use faer::linalg::solvers::{Llt, Svd};
use faer::traits::RealField;
use faer::{Mat, MatRef, Side};
use num_traits::{Float, One};

/// Which triangle of a symmetric buffer is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triangle {
    Lower,
    Upper,
}

/// Singular value decomposition `m = u · diag(s) · vt`.
#[derive(Debug, Clone)]
pub struct SvdFactors<T> {
    pub u: Mat<T>,
    /// Non-negative, descending.
    pub s: Vec<T>,
    pub vt: Mat<T>,
}

/// External dense linear-algebra capability.
pub trait DenseBackend<T> {
    /// Cholesky-factor the `n × n` column-major buffer `a` (leading dimension `lda`) in place.
    ///
    /// Only the triangle selected by `uplo` is read and written. Returns a LAPACK status code.
    fn potrf(&self, uplo: Triangle, n: usize, a: &mut [T], lda: usize) -> i32;

    /// Full singular value decomposition of `m`.
    fn svd(&self, m: MatRef<'_, T>) -> LinalgResult<SvdFactors<T>>;

    /// Unit round-off of the working precision (half the spacing of floats at 1.0).
    fn machine_epsilon(&self) -> T;
}

/// Backend built on faer's `Llt` and `Svd` solvers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaerBackend;

impl<T: RealField + Float> DenseBackend<T> for FaerBackend {
    fn potrf(&self, uplo: Triangle, n: usize, a: &mut [T], lda: usize) -> i32 {
        if lda < n.max(1) {
            return -4;
        }
        if n > 0 && a.len() < lda * (n - 1) + n {
            return -3;
        }
        if n == 0 {
            return 0;
        }

        let side = match uplo {
            Triangle::Lower => Side::Lower,
            Triangle::Upper => Side::Upper,
        };
        let mat = Mat::from_fn(n, n, |i, j| a[j * lda + i]);
        match Llt::new(mat.as_ref(), side) {
            Ok(llt) => {
                let l = llt.L();
                for j in 0..n {
                    for i in 0..n {
                        match uplo {
                            Triangle::Lower if i >= j => a[j * lda + i] = l[(i, j)],
                            // U = Lᵀ
                            Triangle::Upper if i <= j => a[j * lda + i] = l[(j, i)],
                            _ => {}
                        }
                    }
                }
                0
            }
            Err(LltError::NonPositivePivot { index }) => (index + 1) as i32,
        }
    }

    fn svd(&self, m: MatRef<'_, T>) -> LinalgResult<SvdFactors<T>> {
        let svd = Svd::new(m).map_err(|e| LinalgError::NotConverged(format!("svd: {e:?}")))?;
        let s_col = svd.S().column_vector();
        let s = (0..s_col.nrows()).map(|i| s_col[i]).collect();
        Ok(SvdFactors {
            u: svd.U().to_owned(),
            s,
            vt: svd.V().transpose().to_owned(),
        })
    }

    fn machine_epsilon(&self) -> T {
        let two = <T as One>::one() + <T as One>::one();
        <T as Float>::epsilon() / two
    }
}
