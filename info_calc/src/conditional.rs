use crate::conditional::fraction::{reduce_fraction, CondProb};
use crate::EnsembleResult;
use crate::rounding::round3;

pub mod fraction;

/// A conditional probability matrix. Rows index the conditioned variable,
/// columns the variable it is conditioned on.
pub type CondMatrix = Vec<Vec<CondProb>>;

/// `p(xi | yj) = p(xi, yj) / p(yj)`, shaped `[x_size][y_size]`.
pub fn conditional_given_y(matrix: &[Vec<f64>], p_y: &[f64]) -> EnsembleResult<CondMatrix> {
    matrix.iter()
        .map(|row| {
            row.iter()
                .zip(p_y)
                .map(|(p_xy, p_yj)| reduce_fraction(*p_xy, *p_yj).map(CondProb::Fraction))
                .collect::<EnsembleResult<Vec<CondProb>>>()
        })
        .collect()
}

/// `p(yj | xi) = p(xi, yj) / p(xi)`, shaped `[y_size][x_size]`: the row is
/// the Y value, the column the X value it is conditioned on.
pub fn conditional_given_x(matrix: &[Vec<f64>], p_x: &[f64]) -> EnsembleResult<CondMatrix> {
    let y_size = matrix.first().map_or(0, |row| row.len());
    (0..y_size)
        .map(|j| {
            matrix.iter()
                .zip(p_x)
                .map(|(row, p_xi)| reduce_fraction(row[j], *p_xi).map(CondProb::Fraction))
                .collect::<EnsembleResult<Vec<CondProb>>>()
        })
        .collect()
}

/// Conditional matrix of an independent ensemble: row `k` repeats the
/// rounded marginal `p[k]` across all `size` conditioning values.
pub fn fill_conditional(p: &[f64], size: usize) -> CondMatrix {
    p.iter()
        .map(|p_k| vec![CondProb::Value(round3(*p_k)); size])
        .collect()
}
