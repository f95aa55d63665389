use crate::{AsFloat, EnsembleError, EnsembleResult};
use crate::rounding::round3;

/// `p * log2(p)`, with `0 * log2(0)` taken as 0.
fn p_log2_p(p: f64) -> f64 {
    if p == 0.0 {
        0.0
    } else {
        p * p.log2()
    }
}

/// Shannon entropy in bits, rounded to 3 decimals.
pub fn entropy(p: &[f64]) -> f64 {
    round3(p.iter().fold(0.0, |h, p_i| h - p_log2_p(*p_i)))
}

/// Entropy H(X,Y) of every cell of the joint matrix.
pub fn joint_entropy(matrix: &[Vec<f64>]) -> f64 {
    round3(matrix.iter().flatten().fold(0.0, |h, p_ij| h - p_log2_p(*p_ij)))
}

/// Conditional entropy `sum_i p[i] * -(sum_j c(j|i) * log2 c(j|i))`.
///
/// `cond` is indexed `[j][i]`: each row is a value of the conditioned
/// variable and must have one column per entry of `p`, the distribution
/// being conditioned on. `conditional_entropy(y_given_x, p_x)` is H_X(Y).
pub fn conditional_entropy<C: AsFloat>(cond: &[Vec<C>], p: &[f64]) -> EnsembleResult<f64> {
    if let Some(row) = cond.iter().find(|row| row.len() != p.len()) {
        return Err(EnsembleError::Shape(format!(
            "conditional row has {} entries, distribution has {}", row.len(), p.len()
        )));
    }
    let mut h = 0.0;
    for (i, p_i) in p.iter().enumerate() {
        let inner: f64 = cond.iter().map(|row| p_log2_p(row[i].as_f64())).sum();
        h += p_i * -inner;
    }
    Ok(round3(h))
}
