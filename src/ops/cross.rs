//! Cross product of 3-vectors over any ring.

use crate::core::traits::Ring;
use crate::error::{LinalgError, LinalgResult};

/// `a × b` by the determinant formula. Uses only add, subtract and multiply.
pub fn cross<T: Ring>(a: &[T], b: &[T]) -> LinalgResult<Vec<T>> {
    for v in [a, b] {
        if v.len() != 3 {
            return Err(LinalgError::DimensionMismatch { expected: 3, found: v.len() });
        }
    }
    Ok(vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}
