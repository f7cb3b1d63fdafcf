//! Cholesky decomposition `X = L · Lᵀ` for symmetric positive-definite matrices.
//!
//! The input is validated (non-empty, square, symmetric) before the backend is called, since the
//! symmetry scan is far cheaper than the factorization it guards. The lower triangle is copied into a
//! fresh column-major buffer with leading dimension `max(1, n)`, handed to `DenseBackend::potrf`, and
//! the returned status is mapped onto `LinalgError`.
//!
//! # Usage
//! - `cholesky` uses `FaerBackend` with default options.
//! - `cholesky_with` takes an explicit backend and `DecompOptions`.

use crate::config::options::{DecompOptions, StatusPolicy};
use crate::core::traits::{MatrixGet, Semiring};
use crate::decomposition::backend::{DenseBackend, FaerBackend, Triangle};
use crate::error::{LinalgError, LinalgResult};
use crate::matrix::DenseMatrix;
use crate::ops::triangular::lower_triangular;
use crate::utils::validation::{Requirements, require};
use faer::Mat;
use faer::traits::RealField;
use num_traits::Float;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Lower Cholesky factor of `x` using the faer backend.
///
/// # Errors
/// - `EmptyMatrix`, `NotSquare`, `NotSymmetric` from validation.
/// - `NotConverged` if `x` is not positive definite.
pub fn cholesky<M, T>(x: &M) -> LinalgResult<Mat<T>>
where
    M: MatrixGet<T> + Sync + ?Sized,
    T: RealField + Float,
{
    cholesky_with(x, &FaerBackend, &DecompOptions::default())
}

/// Lower Cholesky factor of `x` computed by `backend`.
///
/// The strict upper triangle of the result is zero.
///
/// # Panics
/// Under `StatusPolicy::Abort` (the default), if the backend reports an argument error.
pub fn cholesky_with<M, T, B>(x: &M, backend: &B, options: &DecompOptions<T>) -> LinalgResult<Mat<T>>
where
    M: MatrixGet<T> + Sync + ?Sized,
    T: Semiring + PartialEq,
    B: DenseBackend<T> + ?Sized,
{
    require(x, Requirements::NON_EMPTY | Requirements::SYMMETRIC)?;

    let lower = lower_triangular(x)?;
    let n = lower.nrows();
    let lda = n.max(1);
    let mut buf = lower.to_col_major(lda);

    debug!(n, lda, "dispatching Cholesky factorization");
    let status = backend.potrf(Triangle::Lower, n, &mut buf, lda);
    debug!(status, "Cholesky backend returned");

    match status.cmp(&0) {
        Ordering::Equal => Ok(Mat::from_col_major(n, n, lda, &buf)),
        Ordering::Greater => {
            warn!(minor = status, "matrix is not positive definite");
            Err(LinalgError::NotConverged(format!(
                "leading minor of order {status} is not positive definite"
            )))
        }
        Ordering::Less => match options.status_policy {
            StatusPolicy::Abort => panic!(
                "Cholesky backend rejected argument {} after local validation (n={n}, lda={lda})",
                -status
            ),
            StatusPolicy::Surface => Err(LinalgError::BackendContract { status }),
        },
    }
}
