//! Numerical rank from singular values.

use crate::config::options::DecompOptions;
use crate::core::traits::MatrixGet;
use crate::decomposition::backend::{DenseBackend, FaerBackend, SvdFactors};
use crate::error::LinalgResult;
use faer::Mat;
use faer::traits::RealField;
use num_traits::Float;
use std::fmt::Debug;
use tracing::trace;

/// Rank of `m` via the faer SVD. See [`rank_with`].
pub fn rank<M, T>(m: &M, tol: Option<T>) -> LinalgResult<usize>
where
    M: MatrixGet<T> + ?Sized,
    T: RealField + Float + Debug,
{
    let options = DecompOptions { rank_tol: tol, ..DecompOptions::default() };
    rank_with(m, &FaerBackend, &options)
}

/// Number of singular values of `m` strictly greater than `options.rank_tol`.
///
/// Without an explicit tolerance, uses `max(rows, cols) * eps * max(s)` where `eps` is twice the
/// backend's unit round-off. Matrices with no rows or columns have rank 0.
pub fn rank_with<M, T, B>(m: &M, backend: &B, options: &DecompOptions<T>) -> LinalgResult<usize>
where
    M: MatrixGet<T> + ?Sized,
    T: Float + Debug,
    B: DenseBackend<T> + ?Sized,
{
    let (rows, cols) = (m.nrows(), m.ncols());
    if rows == 0 || cols == 0 {
        return Ok(0);
    }

    let dense = Mat::from_fn(rows, cols, |i, j| m.get(i, j));
    let SvdFactors { s, .. } = backend.svd(dense.as_ref())?;
    let tol = match options.rank_tol {
        Some(tol) => tol,
        None => {
            let eps = backend.machine_epsilon() + backend.machine_epsilon();
            let s_max = s.iter().copied().fold(T::zero(), T::max);
            let dim = T::from(rows.max(cols)).unwrap_or_else(T::max_value);
            dim * eps * s_max
        }
    };

    let r = s.iter().filter(|&&sv| sv > tol).count();
    trace!(rows, cols, ?tol, rank = r, "rank from singular values");
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;
    use crate::matrix::CsrMatrix;
    use faer::MatRef;

    /// Serves a canned spectrum.
    struct Spectrum(Vec<f64>);

    impl DenseBackend<f64> for Spectrum {
        fn potrf(&self, _uplo: crate::decomposition::backend::Triangle, _n: usize, _a: &mut [f64], _lda: usize) -> i32 {
            unreachable!("rank never factors")
        }
        fn svd(&self, m: MatRef<'_, f64>) -> LinalgResult<SvdFactors<f64>> {
            Ok(SvdFactors {
                u: Mat::from_fn(m.nrows(), m.nrows(), |i, j| if i == j { 1.0 } else { 0.0 }),
                s: self.0.clone(),
                vt: Mat::from_fn(m.ncols(), m.ncols(), |i, j| if i == j { 1.0 } else { 0.0 }),
            })
        }
        fn machine_epsilon(&self) -> f64 {
            0.5
        }
    }

    struct Failing;

    impl DenseBackend<f64> for Failing {
        fn potrf(&self, _uplo: crate::decomposition::backend::Triangle, _n: usize, _a: &mut [f64], _lda: usize) -> i32 {
            0
        }
        fn svd(&self, _m: MatRef<'_, f64>) -> LinalgResult<SvdFactors<f64>> {
            Err(LinalgError::NotConverged("stub".into()))
        }
        fn machine_epsilon(&self) -> f64 {
            f64::EPSILON / 2.0
        }
    }

    #[test]
    fn identity_has_full_rank() {
        for n in 1..6 {
            let id = Mat::<f64>::identity(n, n);
            assert_eq!(rank(&id, None).unwrap(), n);
            assert_eq!(rank(&id, Some(0.0)).unwrap(), n);
        }
    }

    #[test]
    fn zero_matrix_has_rank_zero() {
        let z = Mat::<f64>::zeros(4, 3);
        assert_eq!(rank(&z, None).unwrap(), 0);
        assert_eq!(rank(&z, Some(0.0)).unwrap(), 0);
    }

    #[test]
    fn rank_one_outer_product() {
        let m = Mat::<f64>::from_fn(3, 4, |i, j| ((i + 1) * (j + 1)) as f64);
        assert_eq!(rank(&m, None).unwrap(), 1);
    }

    #[test]
    fn default_tolerance_uses_backend_epsilon() {
        // eps = 2 * 0.5 = 1, tol = max(2, 3) * 1 * 4 = 12: nothing survives
        let backend = Spectrum(vec![4.0, 2.0]);
        let m = Mat::<f64>::zeros(2, 3);
        assert_eq!(rank_with(&m, &backend, &DecompOptions::default()).unwrap(), 0);
        // explicit tolerance is strict
        let opts = DecompOptions::default().with_rank_tol(2.0);
        assert_eq!(rank_with(&m, &backend, &opts).unwrap(), 1);
        let opts = DecompOptions::default().with_rank_tol(1.9);
        assert_eq!(rank_with(&m, &backend, &opts).unwrap(), 2);
    }

    #[test]
    fn empty_matrix_skips_backend() {
        let m = Mat::<f64>::zeros(0, 5);
        assert_eq!(rank_with(&m, &Failing, &DecompOptions::default()).unwrap(), 0);
    }

    #[test]
    fn backend_failure_propagates() {
        let m = Mat::<f64>::identity(2, 2);
        let res = rank_with(&m, &Failing, &DecompOptions::default());
        assert!(matches!(res, Err(LinalgError::NotConverged(_))));
    }

    #[test]
    fn tolerance_option_changes_rank() {
        // singular values 1 and 1e-6
        let m = Mat::<f64>::from_fn(2, 2, |i, j| match (i, j) {
            (0, 0) => 1.0,
            (1, 1) => 1e-6,
            _ => 0.0,
        });
        assert_eq!(rank_with(&m, &FaerBackend, &DecompOptions::default()).unwrap(), 2);
        let loose = DecompOptions::default().with_rank_tol(1e-3);
        assert_eq!(rank_with(&m, &FaerBackend, &loose).unwrap(), 1);
    }

    #[test]
    fn sparse_input() {
        // [[1,2],[2,4]] has rank 1
        let s = CsrMatrix::from_csr(2, 2, vec![0, 2, 4], vec![0, 1, 0, 1], vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        assert_eq!(rank(&s, None).unwrap(), 1);
        let id = CsrMatrix::from_csr(3, 3, vec![0, 1, 2, 3], vec![0, 1, 2], vec![1.0, 1.0, 1.0]).unwrap();
        assert_eq!(rank(&id, Some(0.0)).unwrap(), 3);
    }
}
