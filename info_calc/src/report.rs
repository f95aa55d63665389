use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::CondProb;
use crate::conditional::CondMatrix;
use crate::rounding::round_all;

/// Everything computed for one ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleReport {
    pub p_x: Vec<f64>,
    pub p_y: Vec<f64>,
    pub independent: bool,
    /// `x_given_y[i][j] = p(xi | yj)`
    pub x_given_y: CondMatrix,
    /// `y_given_x[j][i] = p(yj | xi)`
    pub y_given_x: CondMatrix,
    pub h_x: f64,
    pub h_y: f64,
    pub h_xy: f64,
    /// H_X(Y)
    pub h_y_given_x: f64,
    /// H_Y(X)
    pub h_x_given_y: f64,
}

fn write_cond_rows(f: &mut Formatter<'_>, rows: &[Vec<CondProb>], label: impl Fn(usize) -> String) -> fmt::Result {
    for (k, row) in rows.iter().enumerate() {
        writeln!(f, "{}: {}", label(k + 1), row.iter().join(" "))?;
    }
    Ok(())
}

impl Display for EnsembleReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.independent {
            writeln!(f, "Ensembles X and Y are independent")?;
        } else {
            writeln!(f, "Ensembles X and Y are dependent")?;
        }
        writeln!(f, "p(xi): {}", round_all(&self.p_x).iter().join(" "))?;
        writeln!(f, "p(yj): {}", round_all(&self.p_y).iter().join(" "))?;

        writeln!(f, "p(xi | yj):")?;
        write_cond_rows(f, &self.x_given_y, |i| format!("p(x{} | yj)", i))?;
        writeln!(f, "p(yj | xi):")?;
        write_cond_rows(f, &self.y_given_x, |j| format!("p(y{} | xi)", j))?;

        writeln!(f, "H(X) = {}", self.h_x)?;
        writeln!(f, "H(Y) = {}", self.h_y)?;
        writeln!(f, "H(XY) = {}", self.h_xy)?;
        writeln!(f, "Hx(Y) = {}", self.h_y_given_x)?;
        writeln!(f, "Hy(X) = {}", self.h_x_given_y)
    }
}
