//! Fixed-point error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixedPointError {
    #[error("Attempted division by zero")]
    DivisionByZero,

    #[error("Square root of a negative value")]
    NegativeSqrtArgument,

    #[error("Precision can only be reduced: requested {requested} bits, current {current}")]
    PrecisionIncrease { requested: usize, current: usize },

    #[error("Precision can only be extended: requested {requested} bits, current {current}")]
    PrecisionDecrease { requested: usize, current: usize },

    #[error("Square root did not converge after {iterations} iterations")]
    ConvergenceFailure { iterations: usize },

    #[error("Invalid decimal `{input}`: {reason}")]
    Parse { input: String, reason: &'static str },

    #[error("Cannot convert a NaN or infinite f64")]
    NonFinite,
}

pub type Result<T> = std::result::Result<T, FixedPointError>;
