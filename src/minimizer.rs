//! This module provides the base framework for the minimizers in this crate, such as the
//! base trait and return type.
use crate::error::Result;
use ndarray::prelude::*;

/// Minimizer states at the end of the run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunStatus {
    /// The spread of objective values over the simplex fell below the tolerance.
    Converged,
    /// The iteration cap was reached first.
    MaxIterReached,
    /// The function evaluation cap was reached first.
    MaxFunReached,
}

/// A minimization result, storing various details of the run and the final results.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimResult {
    /// The parameters with the smallest objective value found.
    pub minimum: Array1<f64>,
    /// The function value at `minimum`.
    pub minimum_value: f64,
    /// The number of iterations run.
    pub iterations: usize,
    /// The number of function evaluations performed.
    pub f_evals: usize,
    /// Largest absolute difference between any vertex value and the best one at termination.
    pub spread: f64,
    /// Why the run stopped.
    pub status: RunStatus,
}

impl OptimResult {
    /// True when the run stopped on the tolerance criterion rather than on a cap.
    pub fn converged(&self) -> bool {
        self.status == RunStatus::Converged
    }
}

/// A general minimizer trait.
pub trait Minimizer {
    /// Minimizes the given function returned scalar value by exploring the parameter space,
    /// starting from `args`.
    fn minimize<F: Fn(ArrayView1<f64>) -> f64>(
        &self,
        func: F,
        args: ArrayView1<f64>,
    ) -> Result<OptimResult>;
}
