//! Kronecker product.

use crate::core::traits::{ActiveEntries, ScaleBy};
use faer::Mat;
use num_traits::Zero;

/// Kronecker product `a ⊗ b`.
///
/// The result has shape `(a.rows * b.rows) × (a.cols * b.cols)` and starts zero-filled. For every
/// active entry `(r, c, av)` of `a`, the block at rows `r*b.rows..(r+1)*b.rows` and columns
/// `c*b.cols..(c+1)*b.cols` is overwritten with `av · b`. Blocks are disjoint, so a sparse `a`
/// only pays for its stored entries.
pub fn kron<A, B, V, RV>(a: &A, b: &B) -> Mat<RV>
where
    A: ActiveEntries<V> + ?Sized,
    B: ScaleBy<V, Output = RV> + ?Sized,
    RV: Copy + Zero,
{
    let (br, bc) = (b.nrows(), b.ncols());
    let mut out = Mat::from_fn(a.nrows() * br, a.ncols() * bc, |_, _| RV::zero());
    for (r, c, av) in a.active_entries() {
        let block = b.scale_by(av);
        for j in 0..bc {
            for i in 0..br {
                out[(r * br + i, c * bc + j)] = block[(i, j)];
            }
        }
    }
    out
}
