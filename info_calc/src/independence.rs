use itertools::iproduct;

use crate::rounding::round3;

/// Tests `p(xi, yj) == p(xi) * p(yj)` for every cell, comparing values
/// rounded to 3 decimals.
///
/// Equality after rounding is exact, not within an epsilon, so inputs close
/// to a rounding boundary can be classified either way. The caller must pass
/// the marginals of `matrix`, which `Ensemble` guarantees.
pub(crate) fn is_independent(matrix: &[Vec<f64>], p_x: &[f64], p_y: &[f64]) -> bool {
    iproduct!(0..p_x.len(), 0..p_y.len())
        .all(|(i, j)| round3(matrix[i][j]) == round3(p_x[i] * p_y[j]))
}
