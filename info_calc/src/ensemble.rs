use tracing::debug;

use crate::{EnsembleError, EnsembleResult};
use crate::conditional::{conditional_given_x, conditional_given_y, fill_conditional};
use crate::entropy::{conditional_entropy, entropy, joint_entropy};
use crate::independence::is_independent;
use crate::marginal::{check_shape, marginals};
use crate::report::EnsembleReport;

/// Joint distribution of two discrete variables: `probabilities[i][j] = p(xi, yj)`.
///
/// The matrix is assumed to sum to 1; only its shape and finiteness are checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    probabilities: Vec<Vec<f64>>,
}

impl Ensemble {
    pub fn new(probabilities: Vec<Vec<f64>>) -> EnsembleResult<Self> {
        check_shape(&probabilities)?;
        if let Some(p) = probabilities.iter().flatten().find(|p| !p.is_finite()) {
            return Err(EnsembleError::InvalidProbability(*p));
        }
        Ok(Self { probabilities })
    }

    /// Builds an `x_size` by `y_size` ensemble from row-major values.
    pub fn from_flat(x_size: usize, y_size: usize, values: Vec<f64>) -> EnsembleResult<Self> {
        if x_size == 0 || y_size == 0 {
            return Err(EnsembleError::Shape(format!("invalid dimensions {}x{}", x_size, y_size)));
        }
        let cells = x_size.checked_mul(y_size).ok_or_else(|| {
            EnsembleError::Shape(format!("dimensions {}x{} are too large", x_size, y_size))
        })?;
        if values.len() != cells {
            return Err(EnsembleError::Shape(format!(
                "expected {} probabilities for {}x{}, got {}",
                cells, x_size, y_size, values.len()
            )));
        }
        let rows = values.chunks(y_size).map(|row| row.to_vec()).collect();
        Ensemble::new(rows)
    }

    pub fn probabilities(&self) -> &[Vec<f64>] {
        &self.probabilities
    }

    pub fn x_size(&self) -> usize {
        self.probabilities.len()
    }

    pub fn y_size(&self) -> usize {
        self.probabilities[0].len()
    }

    /// Runs the whole pipeline, stopping at the first error.
    pub fn analyze(&self) -> EnsembleResult<EnsembleReport> {
        let matrix = &self.probabilities;
        let (p_x, p_y) = marginals(matrix)?;
        debug!(?p_x, ?p_y, "computed marginals");

        let independent = is_independent(matrix, &p_x, &p_y);
        debug!(independent, "tested independence");

        let (x_given_y, y_given_x) = if independent {
            (fill_conditional(&p_x, p_y.len()), fill_conditional(&p_y, p_x.len()))
        } else {
            (conditional_given_y(matrix, &p_y)?, conditional_given_x(matrix, &p_x)?)
        };

        let h_x = entropy(&p_x);
        let h_y = entropy(&p_y);
        let h_xy = joint_entropy(matrix);
        let h_y_given_x = conditional_entropy(&y_given_x, &p_x)?;
        let h_x_given_y = conditional_entropy(&x_given_y, &p_y)?;
        debug!(h_x, h_y, h_xy, h_y_given_x, h_x_given_y, "computed entropies");

        Ok(EnsembleReport {
            p_x,
            p_y,
            independent,
            x_given_y,
            y_given_x,
            h_x,
            h_y,
            h_xy,
            h_y_given_x,
            h_x_given_y,
        })
    }
}
