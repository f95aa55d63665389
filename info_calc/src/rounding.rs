/// Fixed-point scale shared by rounding and the fraction reducer (thousandths).
pub const SCALE: f64 = 1000.0;

/// Rounds to 3 decimal digits, half away from zero.
///
/// Two probabilities are treated as equal throughout the crate iff their
/// rounded values are equal.
pub fn round3(value: f64) -> f64 {
    (value * SCALE).round() / SCALE
}

pub fn round_all(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| round3(*v)).collect()
}
