//! Derivative-free minimization of functions of several real variables with the
//! Nelder-Mead downhill simplex method.
//!
//! ```
//! # extern crate ndarray;
//! # extern crate downhill;
//! # use ndarray::prelude::*;
//! let x = downhill::optimize(
//!     arr1(&[0.0]).view(),
//!     1e-6,
//!     1.0,
//!     1.0,
//!     0.5,
//!     2.0,
//!     500,
//!     |x: ArrayView1<f64>| (x[0] - 3.0).powi(2),
//! )
//! .unwrap();
//! assert!((x[0] - 3.0).abs() < 1e-3);
//! ```

#[macro_use]
extern crate derive_builder;

pub mod error;
pub mod minimizer;
pub mod utils;
pub mod vector;

pub use crate::error::{Result, SimplexError};
pub use crate::minimizer::{Minimizer, OptimResult, RunStatus};
pub use crate::vector::optimize;
