// CsrMatrix: faer compressed sparse row storage with sparse-aware active entries

use crate::core::traits::{ActiveEntries, MatShape, MatrixGet, ScaleBy};
use crate::error::{LinalgError, LinalgResult};
use faer::Mat;
use faer::sparse::{SparseRowMat, SymbolicSparseRowMat, Triplet};
use faer::traits::ComplexField;
use num_traits::Zero;
use std::ops::Mul;

/// Row-compressed sparse matrix. Only stored entries are active.
#[derive(Debug, Clone)]
pub struct CsrMatrix<T> {
    inner: SparseRowMat<usize, T>,
}

impl<T> CsrMatrix<T> {
    /// Build a CSR from raw row‐ptr, col‐idx, and values.
    ///
    /// Column indices within a row must be strictly increasing and below `ncols`.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> LinalgResult<Self> {
        check_structure(nrows, ncols, &row_ptr, &col_idx, values.len())?;
        // structure is already valid, so the faer checks hold
        let symbolic = SymbolicSparseRowMat::new_checked(nrows, ncols, row_ptr, None, col_idx);
        let inner = SparseRowMat::new(symbolic, values);
        Ok(Self { inner })
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.inner.val().len()
    }

    /// Borrow the underlying faer matrix.
    pub fn as_faer(&self) -> &SparseRowMat<usize, T> {
        &self.inner
    }
}

impl<T: ComplexField> CsrMatrix<T> {
    /// Build from `(row, col, value)` triplets in any order. Repeated positions are summed.
    pub fn from_triplets(nrows: usize, ncols: usize, entries: &[(usize, usize, T)]) -> LinalgResult<Self> {
        let triplets: Vec<Triplet<usize, usize, T>> = entries
            .iter()
            .map(|(i, j, v)| Triplet::new(*i, *j, v.clone()))
            .collect();
        let inner = SparseRowMat::try_new_from_triplets(nrows, ncols, &triplets)?;
        Ok(Self { inner })
    }
}

impl<T: Copy + Zero> CsrMatrix<T> {
    /// Expand into a dense faer matrix.
    pub fn to_dense(&self) -> Mat<T> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self.get(i, j))
    }
}

fn malformed(reason: String) -> LinalgError {
    LinalgError::MalformedSparse(reason)
}

/// Reports, as an error, every condition `SymbolicSparseRowMat::new_checked` asserts on.
fn check_structure(
    nrows: usize,
    ncols: usize,
    row_ptr: &[usize],
    col_idx: &[usize],
    nvalues: usize,
) -> LinalgResult<()> {
    if row_ptr.len() != nrows + 1 {
        return Err(malformed(format!(
            "row_ptr has {} offsets, expected {}",
            row_ptr.len(),
            nrows + 1
        )));
    }
    if row_ptr[0] != 0 {
        return Err(malformed(format!("row_ptr starts at {}, expected 0", row_ptr[0])));
    }
    if let Some(i) = (0..nrows).find(|&i| row_ptr[i] > row_ptr[i + 1]) {
        return Err(malformed(format!("row_ptr decreases at row {i}")));
    }
    let nnz = row_ptr[nrows];
    if col_idx.len() != nnz || nvalues != nnz {
        return Err(malformed(format!(
            "row_ptr declares {nnz} entries, got {} column indices and {nvalues} values",
            col_idx.len()
        )));
    }
    for i in 0..nrows {
        let cols = &col_idx[row_ptr[i]..row_ptr[i + 1]];
        if let Some(&j) = cols.iter().find(|&&j| j >= ncols) {
            return Err(malformed(format!("column {j} in row {i} is out of bounds for {ncols} columns")));
        }
        if let Some(w) = cols.windows(2).find(|w| w[0] >= w[1]) {
            return Err(malformed(format!(
                "columns in row {i} are not strictly increasing ({} then {})",
                w[0], w[1]
            )));
        }
    }
    Ok(())
}

impl<T> MatShape for CsrMatrix<T> {
    fn nrows(&self) -> usize {
        self.inner.nrows()
    }
    fn ncols(&self) -> usize {
        self.inner.ncols()
    }
}

impl<T: Copy + Zero> MatrixGet<T> for CsrMatrix<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self.inner.get(i, j).copied().unwrap_or_else(T::zero)
    }
}

impl<T: Copy> ActiveEntries<T> for CsrMatrix<T> {
    fn active_entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.inner.nrows()).flat_map(move |i| {
            self.inner
                .col_idx_of_row(i)
                .zip(self.inner.val_of_row(i))
                .map(move |(j, &v)| (i, j, v))
        })
    }
}

impl<T, S> ScaleBy<S> for CsrMatrix<T>
where
    T: Copy,
    S: Copy + Mul<T>,
    S::Output: Zero,
{
    type Output = S::Output;

    fn scale_by(&self, s: S) -> Mat<S::Output> {
        let mut out = Mat::from_fn(self.nrows(), self.ncols(), |_, _| <S::Output as Zero>::zero());
        for (i, j, v) in self.active_entries() {
            out[(i, j)] = s * v;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_entries() {
        // 3×3 identity in CSR: row_ptr=[0,1,2,3], col_idx=[0,1,2], vals=[1,1,1]
        let m = CsrMatrix::from_csr(3, 3, vec![0, 1, 2, 3], vec![0, 1, 2], vec![1.0, 1.0, 1.0]).unwrap();
        let entries: Vec<_> = m.active_entries().collect();
        assert_eq!(entries, vec![(0, 0, 1.0), (1, 1, 1.0), (2, 2, 1.0)]);
        assert_eq!(m.get(0, 2), 0.0);
    }

    #[test]
    fn simple_pattern() {
        // 2×3 matrix [[1,2,0],[0,3,4]]
        let m = CsrMatrix::from_csr(
            2, 3,
            vec![0, 2, 4],
            vec![0, 1, 1, 2],
            vec![1.0, 2.0, 3.0, 4.0],
        ).unwrap();
        assert_eq!(m.nnz(), 4);
        let d = m.to_dense();
        assert_eq!(d[(0, 1)], 2.0);
        assert_eq!(d[(1, 0)], 0.0);
        assert_eq!(d[(1, 2)], 4.0);
        let s = m.scale_by(2.0f64);
        assert_eq!(s[(1, 1)], 6.0);
        assert_eq!(s[(0, 2)], 0.0);
    }

    #[test]
    fn rejects_inconsistent_arrays() {
        let bad = [
            CsrMatrix::from_csr(2, 2, vec![0, 1], vec![0], vec![1.0]),
            CsrMatrix::from_csr(1, 2, vec![1, 1], vec![], vec![]),
            CsrMatrix::from_csr(2, 2, vec![0, 1, 0], vec![0], vec![1.0]),
            CsrMatrix::from_csr(1, 2, vec![0, 1], vec![0], vec![1.0, 2.0]),
            CsrMatrix::from_csr(1, 2, vec![0, 1], vec![5], vec![1.0]),
        ];
        for res in bad {
            assert!(matches!(res, Err(LinalgError::MalformedSparse(_))));
        }
    }

    #[test]
    fn rejects_unsorted_and_duplicate_columns() {
        let unsorted = CsrMatrix::from_csr(1, 3, vec![0, 3], vec![2, 1, 0], vec![2.0, 1.0, 3.0]);
        assert!(matches!(unsorted, Err(LinalgError::MalformedSparse(_))));
        let duplicate = CsrMatrix::from_csr(1, 3, vec![0, 2], vec![1, 1], vec![1.0, 1.0]);
        assert!(matches!(duplicate, Err(LinalgError::MalformedSparse(_))));
    }

    #[test]
    fn reads_agree_across_access_paths() {
        // [[3,1,2],[0,0,0],[0,5,0]]
        let m = CsrMatrix::from_csr(3, 3, vec![0, 3, 3, 4], vec![0, 1, 2, 1], vec![3.0, 1.0, 2.0, 5.0]).unwrap();
        let dense = m.to_dense();
        for (i, j, v) in m.active_entries() {
            assert_eq!(m.get(i, j), v);
            assert_eq!(dense[(i, j)], v);
        }
        assert_eq!(m.active_entries().count(), m.nnz());
    }

    #[test]
    fn triplets_in_any_order() {
        let m = CsrMatrix::from_triplets(2, 3, &[(1, 2, 4.0), (0, 1, 2.0), (1, 0, -1.0)]).unwrap();
        assert_eq!(m.nnz(), 3);
        let entries: Vec<_> = m.active_entries().collect();
        assert_eq!(entries, vec![(0, 1, 2.0), (1, 0, -1.0), (1, 2, 4.0)]);

        let err = CsrMatrix::from_triplets(2, 2, &[(0, 3, 1.0)]).unwrap_err();
        assert!(matches!(err, LinalgError::MalformedSparse(_)));
    }
}
