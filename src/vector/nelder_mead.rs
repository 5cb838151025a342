//! The Nelder-Mead downhill simplex method.
//!
//! Starting from a simplex of `n + 1` points around the initial guess, every iteration
//! replaces the worst vertex by reflecting it through the centroid of the others, possibly
//! expanding further or contracting back, and shrinks the whole simplex towards the best
//! vertex when none of those moves improves on the worst value. The run stops once all
//! vertex values lie within `tolerance` of the best one.
//!
//! # Use case
//!
//! The Nelder-Mead algorithm does not require a gradient or a hessian.
//! As a tradeoff it typically requires a lot of function evaluations to
//! find a minimum, and it only ever finds a local one.
//!
//! # Examples
//!
//! ```
//! # extern crate ndarray;
//! # extern crate downhill;
//! # use ndarray::prelude::*;
//! # use downhill::Minimizer;
//! # use downhill::vector::NelderMeadBuilder;
//!
//! let function = |x: ArrayView1<f64>| (x[0] - 3.0).powi(2) + (x[1] + 1.0).powi(2);
//! let minimizer = NelderMeadBuilder::default()
//!     .tolerance(1e-10)
//!     .max_iter(500)
//!     .build()
//!     .unwrap();
//! let args = Array::from_vec(vec![0.0, 0.0]);
//! let res = minimizer.minimize(&function, args.view()).unwrap();
//! assert!(res.converged());
//! assert!((res.minimum[0] - 3.0).abs() < 1e-3);
//! ```

use crate::error::{Result, SimplexError};
use crate::minimizer::{Minimizer, OptimResult, RunStatus};
use crate::utils::WrappedFunction;
use crate::vector::Simplex;
use log::{debug, info};
use ndarray::prelude::*;

/// The move a single iteration made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The worst vertex was replaced by its reflection through the centroid.
    Reflection,
    /// The reflection beat the best vertex and was pushed further out.
    Expansion,
    /// The worst vertex was pulled towards the centroid.
    Contraction,
    /// All vertices but the best were pulled towards the best one.
    Shrink,
}

#[derive(Builder, Debug, Clone)]
/// A minimizer for a scalar function of one or more variables using the Nelder-Mead algorithm.
pub struct NelderMead {
    /// The run has converged once every vertex value is within `tolerance` of the best one.
    /// Must be positive.
    #[builder(default = "1e-8")]
    pub tolerance: f64,

    /// Edge length of the initial simplex along each axis. Also the factor by which a shrink
    /// moves vertices towards the best one.
    #[builder(default = "1.0")]
    pub scaling: f64,

    /// Reflection coefficient.
    #[builder(default = "1.0")]
    pub reflection: f64,

    /// Expansion coefficient, applied to the reflected point.
    #[builder(default = "2.0")]
    pub expansion: f64,

    /// Contraction coefficient, applied to the worst point.
    #[builder(default = "0.5")]
    pub contraction: f64,

    /// The maximum number of iterations. Defaults to n*200 where n is the number of
    /// parameters to optimize.
    #[builder(default = "None")]
    #[builder(setter(into))]
    pub max_iter: Option<usize>,

    /// The maximum number of function calls, checked between iterations. Unbounded by default.
    #[builder(default = "None")]
    #[builder(setter(into))]
    pub maxfun: Option<usize>,
}

impl NelderMead {
    /// Checks the configuration against an initial guess before anything is evaluated.
    pub fn validate(&self, x0: ArrayView1<f64>) -> Result<()> {
        if x0.is_empty() {
            return Err(SimplexError::EmptyInitialGuess);
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(SimplexError::NonPositiveTolerance(self.tolerance));
        }
        Ok(())
    }

    /// Validates the configuration and builds the starting simplex around `x0`.
    pub fn initial_simplex<F>(
        &self,
        func: &mut WrappedFunction<F>,
        x0: ArrayView1<f64>,
    ) -> Result<Simplex>
    where
        F: Fn(ArrayView1<f64>) -> f64,
    {
        self.validate(x0)?;
        Ok(Simplex::new(x0, self.scaling, func))
    }

    /// Runs one iteration on `simplex` and reports which move it made.
    pub fn step<F>(&self, simplex: &mut Simplex, func: &mut WrappedFunction<F>) -> Step
    where
        F: Fn(ArrayView1<f64>) -> f64,
    {
        let n = simplex.dim();
        let order = simplex.ordering();
        let (best, second_worst, worst) = (order[0], order[n - 1], order[n]);
        let f_best = simplex.values()[best];
        let f_second_worst = simplex.values()[second_worst];
        let f_worst = simplex.values()[worst];

        let centroid = simplex.centroid(worst);
        let x_worst = simplex.vertex(worst).to_owned();

        let reflected = &centroid + &(self.reflection * &(&centroid - &x_worst));
        let f_reflected = func.call(reflected.view());

        if f_reflected < f_best {
            let expanded = &centroid + &(self.expansion * &(&reflected - &centroid));
            let f_expanded = func.call(expanded.view());

            if f_expanded < f_reflected {
                simplex.replace(worst, expanded.view(), f_expanded);
                Step::Expansion
            } else {
                simplex.replace(worst, reflected.view(), f_reflected);
                Step::Reflection
            }
        } else if f_reflected < f_second_worst {
            simplex.replace(worst, reflected.view(), f_reflected);
            Step::Reflection
        } else {
            let contracted = &centroid + &(self.contraction * &(&x_worst - &centroid));
            let f_contracted = func.call(contracted.view());

            if f_contracted < f_worst {
                simplex.replace(worst, contracted.view(), f_contracted);
                Step::Contraction
            } else {
                simplex.shrink(best, self.scaling, func);
                Step::Shrink
            }
        }
    }
}

impl Minimizer for NelderMead {
    fn minimize<F>(&self, func: F, args: ArrayView1<f64>) -> Result<OptimResult>
    where
        F: Fn(ArrayView1<f64>) -> f64,
    {
        let mut func = WrappedFunction::new(func);
        let mut simplex = self.initial_simplex(&mut func, args)?;
        let maxiter = self.max_iter.unwrap_or(200 * simplex.dim());

        let mut iterations = 0;
        let mut fun_capped = false;
        let mut spread = simplex.spread();

        while iterations < maxiter {
            if self.maxfun.map_or(false, |v| v <= func.num) {
                fun_capped = true;
                break;
            }
            let step = self.step(&mut simplex, &mut func);
            spread = simplex.spread();
            iterations += 1;
            debug!("iteration {}: {:?}, spread {:e}", iterations, step, spread);

            if spread < self.tolerance {
                break;
            }
        }

        let status = if spread < self.tolerance {
            RunStatus::Converged
        } else if fun_capped {
            RunStatus::MaxFunReached
        } else {
            RunStatus::MaxIterReached
        };

        let best = simplex.best();
        let result = OptimResult {
            minimum: simplex.vertex(best).to_owned(),
            minimum_value: simplex.values()[best],
            iterations,
            f_evals: func.num,
            spread,
            status,
        };
        info!(
            "nelder-mead stopped with {:?} after {} iterations and {} evaluations, f = {}",
            result.status, result.iterations, result.f_evals, result.minimum_value
        );
        Ok(result)
    }
}

/// Minimizes `objective` from `initial_guess` with explicitly chosen coefficients and returns
/// the best vertex found, whether or not the run converged.
#[allow(clippy::too_many_arguments)]
pub fn optimize<F>(
    initial_guess: ArrayView1<f64>,
    tolerance: f64,
    scaling_factor: f64,
    reflection_factor: f64,
    contraction_factor: f64,
    expansion_factor: f64,
    max_iterations: usize,
    objective: F,
) -> Result<Array1<f64>>
where
    F: Fn(ArrayView1<f64>) -> f64,
{
    let minimizer = NelderMead {
        tolerance,
        scaling: scaling_factor,
        reflection: reflection_factor,
        expansion: expansion_factor,
        contraction: contraction_factor,
        max_iter: Some(max_iterations),
        maxfun: None,
    };
    minimizer
        .minimize(objective, initial_guess)
        .map(|res| res.minimum)
}
