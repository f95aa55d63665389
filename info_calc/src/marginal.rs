use tracing::warn;

use crate::{EnsembleError, EnsembleResult};

/// Tolerance within which a marginal distribution is expected to sum to 1.
pub const SUM_TOLERANCE: f64 = 0.001;

/// Checks that `matrix` is non-empty and rectangular, returning `(x_size, y_size)`.
pub fn check_shape(matrix: &[Vec<f64>]) -> EnsembleResult<(usize, usize)> {
    let x_size = matrix.len();
    if x_size == 0 {
        return Err(EnsembleError::Shape(String::from("matrix has no rows")));
    }
    let y_size = matrix[0].len();
    if y_size == 0 {
        return Err(EnsembleError::Shape(String::from("matrix has no columns")));
    }
    if let Some((i, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != y_size) {
        return Err(EnsembleError::Shape(format!(
            "row {} has {} entries, expected {}", i, row.len(), y_size
        )));
    }
    Ok((x_size, y_size))
}

/// Row sums `p(xi)` and column sums `p(yj)` of the joint matrix.
pub fn marginals(matrix: &[Vec<f64>]) -> EnsembleResult<(Vec<f64>, Vec<f64>)> {
    let (x_size, y_size) = check_shape(matrix)?;
    let mut p_x = vec![0.0; x_size];
    let mut p_y = vec![0.0; y_size];
    for (i, row) in matrix.iter().enumerate() {
        for (j, p) in row.iter().enumerate() {
            p_x[i] += p;
            p_y[j] += p;
        }
    }
    warn_if_not_normalized("p(x)", &p_x);
    warn_if_not_normalized("p(y)", &p_y);
    Ok((p_x, p_y))
}

fn warn_if_not_normalized(name: &str, dist: &[f64]) {
    let total: f64 = dist.iter().sum();
    if (total - 1.0).abs() > SUM_TOLERANCE {
        warn!(distribution = name, total, "marginal distribution does not sum to 1");
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_uniform_2x2() {
        let matrix = vec!(vec!(0.25, 0.25), vec!(0.25, 0.25));
        let (p_x, p_y) = marginals(&matrix).unwrap();
        assert_eq!(vec!(0.5, 0.5), p_x);
        assert_eq!(vec!(0.5, 0.5), p_y);
    }

    #[test]
    fn test_rectangular() {
        let matrix = vec!(
            vec!(0.1, 0.2, 0.1),
            vec!(0.3, 0.1, 0.2),
        );
        let (p_x, p_y) = marginals(&matrix).unwrap();
        assert_eq!(2, p_x.len());
        assert_eq!(3, p_y.len());
        assert_abs_diff_eq!(0.4, p_x[0], epsilon = 1e-12);
        assert_abs_diff_eq!(0.6, p_x[1], epsilon = 1e-12);
        assert_abs_diff_eq!(0.4, p_y[0], epsilon = 1e-12);
        assert_abs_diff_eq!(0.3, p_y[1], epsilon = 1e-12);
        assert_abs_diff_eq!(0.3, p_y[2], epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, p_x.iter().sum::<f64>(), epsilon = SUM_TOLERANCE);
        assert_abs_diff_eq!(1.0, p_y.iter().sum::<f64>(), epsilon = SUM_TOLERANCE);
    }

    #[test]
    fn test_shape_errors() {
        let empty: Vec<Vec<f64>> = vec!();
        assert!(matches!(marginals(&empty), Err(EnsembleError::Shape(_))));

        let no_cols: Vec<Vec<f64>> = vec!(vec!(), vec!());
        assert!(matches!(marginals(&no_cols), Err(EnsembleError::Shape(_))));

        let ragged = vec!(vec!(0.5, 0.25), vec!(0.25));
        assert!(matches!(marginals(&ragged), Err(EnsembleError::Shape(_))));
    }

    #[test]
    fn test_check_shape() {
        let matrix = vec!(vec!(0.5), vec!(0.25), vec!(0.25));
        assert_eq!((3, 1), check_shape(&matrix).unwrap());
    }
}
