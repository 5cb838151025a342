//! Errors reported before a minimization run starts.
//!
//! Numerical trouble during a run (NaN or infinite objective values, a cap
//! reached before convergence) is not an error: it is reported through
//! [`RunStatus`](../minimizer/enum.RunStatus.html) instead.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, SimplexError>;

/// Invalid input handed to a minimizer.
#[derive(Debug, Error, PartialEq)]
pub enum SimplexError {
    /// The initial guess has no coordinates, so no simplex can be built.
    #[error("initial guess must have at least one coordinate")]
    EmptyInitialGuess,

    /// The convergence tolerance is zero, negative or NaN.
    #[error("tolerance must be positive, got {0}")]
    NonPositiveTolerance(f64),

    /// A point could not be read from its textual form.
    #[error("invalid point: {message}")]
    InvalidPoint { message: String },

    /// A command-line argument other than the point could not be used.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            SimplexError::NonPositiveTolerance(-1.0).to_string(),
            "tolerance must be positive, got -1"
        );
        let err = SimplexError::InvalidPoint {
            message: "'x' is not a number".into(),
        };
        assert_eq!(err.to_string(), "invalid point: 'x' is not a number");
    }
}
