//! Tie-aware ranking.
//!
//! Ranks are 1-based and tied values share the average of the positions they occupy in sorted
//! order, so `[10, 20, 20, 30]` ranks as `[1.0, 2.5, 2.5, 4.0]`.

use std::cmp::Ordering;

/// Average ranks of `x` under its natural order.
pub fn ranks<T: Ord>(x: &[T]) -> Vec<f64> {
    ranks_by(x, T::cmp)
}

/// Average ranks of `x` under the total order `cmp`.
///
/// Use `f64::total_cmp` for floating-point input.
pub fn ranks_by<T, F>(x: &[T], mut cmp: F) -> Vec<f64>
where
    F: FnMut(&T, &T) -> Ordering,
{
    // stable argsort: ties keep their original index order
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&p, &q| cmp(&x[p], &x[q]));

    let mut out = vec![0.0; x.len()];
    let mut i = 0;
    while i < order.len() {
        let head = &x[order[i]];
        let k = 1 + order[i + 1..]
            .iter()
            .take_while(|&&idx| cmp(&x[idx], head) == Ordering::Equal)
            .count();
        let rank = 1.0 + i as f64 + (k - 1) as f64 / 2.0;
        for &idx in &order[i..i + k] {
            out[idx] = rank;
        }
        i += k;
    }
    out
}
