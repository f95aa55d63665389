use serde::{Deserialize, Serialize};

use crate::{Ensemble, EnsembleError, EnsembleResult};

/// On-disk form of an ensemble: declared dimensions plus the joint matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleDescription {
    x_size: usize,
    y_size: usize,
    probabilities: Vec<Vec<f64>>,
}

impl EnsembleDescription {
    pub fn new(probabilities: Vec<Vec<f64>>) -> Self {
        Self {
            x_size: probabilities.len(),
            y_size: probabilities.first().map_or(0, |row| row.len()),
            probabilities,
        }
    }

    pub fn to_ensemble(&self) -> EnsembleResult<Ensemble> {
        let ens = Ensemble::new(self.probabilities.clone())?;
        if ens.x_size() != self.x_size || ens.y_size() != self.y_size {
            return Err(EnsembleError::Shape(format!(
                "declared {}x{} but matrix is {}x{}",
                self.x_size, self.y_size, ens.x_size(), ens.y_size()
            )));
        }
        Ok(ens)
    }
}

impl From<&Ensemble> for EnsembleDescription {
    fn from(ens: &Ensemble) -> Self {
        EnsembleDescription::new(ens.probabilities().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_test() {
        let ens = Ensemble::new(vec!(vec!(0.1, 0.2, 0.1), vec!(0.3, 0.1, 0.2))).unwrap();
        let desc = EnsembleDescription::from(&ens);
        let json = serde_json::to_string_pretty(&desc).unwrap();
        let copy: EnsembleDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(desc, copy);
        assert_eq!(ens, copy.to_ensemble().unwrap());
    }

    #[test]
    fn test_declared_size_mismatch() {
        let json = r#"{"x_size": 3, "y_size": 2, "probabilities": [[0.25, 0.25], [0.25, 0.25]]}"#;
        let desc: EnsembleDescription = serde_json::from_str(json).unwrap();
        assert!(matches!(desc.to_ensemble(), Err(EnsembleError::Shape(_))));
    }

    #[test]
    fn test_ragged_matrix() {
        let json = r#"{"x_size": 2, "y_size": 2, "probabilities": [[0.5, 0.25], [0.25]]}"#;
        let desc: EnsembleDescription = serde_json::from_str(json).unwrap();
        assert!(matches!(desc.to_ensemble(), Err(EnsembleError::Shape(_))));
    }
}
