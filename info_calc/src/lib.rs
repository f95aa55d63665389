pub mod rounding;
pub mod marginal;
pub mod independence;
pub mod conditional;
pub mod entropy;
pub mod ensemble;
pub mod report;
pub mod serialization;

pub use conditional::fraction::{AsFloat, CondProb};
pub use ensemble::Ensemble;
pub use report::EnsembleReport;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EnsembleError {
    #[error("shape error: {0}")]
    Shape(String),
    #[error("division by zero: conditioning probability is 0")]
    DivisionByZero,
    #[error("parse error: {0:?}")]
    Parse(String),
    #[error("invalid probability: {0}")]
    InvalidProbability(f64),
}

pub type EnsembleResult<T> = Result<T, EnsembleError>;
