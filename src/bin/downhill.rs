//! Minimizes one of a few built-in objectives from the command line.
//!
//! ```text
//! downhill <x0,x1,...> [tolerance] [max_iter] [sphere|rosenbrock|shifted]
//! ```
//!
//! Set `DOWNHILL_LOG=debug` to trace every iteration.

use std::env;
use std::process;

use downhill::utils::parse_point;
use downhill::vector::{NelderMead, NelderMeadBuilder};
use downhill::{Minimizer, OptimResult, Result, SimplexError};
use env_logger::{Builder, Env};
use ndarray::prelude::*;

const DOWNHILL_LOG: &str = "DOWNHILL_LOG";
const USAGE: &str = "usage: downhill <x0,x1,...> [tolerance] [max_iter] [sphere|rosenbrock|shifted]";

type Objective = fn(ArrayView1<f64>) -> f64;

fn sphere(x: ArrayView1<f64>) -> f64 {
    x.mapv(|xi| xi * xi).scalar_sum()
}

fn shifted(x: ArrayView1<f64>) -> f64 {
    x.mapv(|xi| (xi - 3.0).powi(2)).scalar_sum()
}

fn rosenbrock(x: ArrayView1<f64>) -> f64 {
    (1..x.len())
        .map(|i| (1.0 - x[i - 1]).powi(2) + 100.0 * (x[i] - x[i - 1].powi(2)).powi(2))
        .sum()
}

fn invalid(message: String) -> SimplexError {
    SimplexError::InvalidArgument { message }
}

/// Everything needed for one run, read from the arguments after the program name.
struct Invocation {
    x0: Array1<f64>,
    minimizer: NelderMead,
    objective: Objective,
}

fn parse_args(args: &[String]) -> Result<Invocation> {
    if args.is_empty() || args.len() > 4 {
        return Err(invalid(format!(
            "expected between one and four arguments, got {}",
            args.len()
        )));
    }

    let x0 = parse_point(&args[0])?;
    let tolerance = match args.get(1) {
        Some(t) => t
            .parse::<f64>()
            .map_err(|_| invalid(format!("'{}' is not a valid tolerance", t)))?,
        None => 1e-8,
    };
    let max_iter = match args.get(2) {
        Some(m) => Some(
            m.parse::<usize>()
                .map_err(|_| invalid(format!("'{}' is not a valid iteration cap", m)))?,
        ),
        None => None,
    };
    let objective: Objective = match args.get(3).map(String::as_str) {
        None | Some("sphere") => sphere,
        Some("shifted") => shifted,
        Some("rosenbrock") if x0.len() >= 2 => rosenbrock,
        Some("rosenbrock") => {
            return Err(invalid("rosenbrock needs at least two coordinates".into()))
        }
        Some(other) => return Err(invalid(format!("unknown objective '{}'", other))),
    };

    let minimizer = NelderMeadBuilder::default()
        .tolerance(tolerance)
        .max_iter(max_iter)
        .build()
        .map_err(invalid)?;

    Ok(Invocation {
        x0,
        minimizer,
        objective,
    })
}

fn run(args: &[String]) -> Result<OptimResult> {
    let invocation = parse_args(args)?;
    invocation
        .minimizer
        .minimize(invocation.objective, invocation.x0.view())
}

fn main() {
    let env = Env::new().filter_or(DOWNHILL_LOG, "warn");
    let mut builder = Builder::from_env(env);
    let builder = builder.target(env_logger::Target::Stdout);
    builder.try_init().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(res) => {
            println!("minimum: {}", res.minimum);
            println!("value: {:e}", res.minimum_value);
            println!(
                "status: {:?} ({} iterations, {} evaluations)",
                res.status, res.iterations, res.f_evals
            );
        }
        Err(e) => {
            eprintln!("error: {}\n{}", e, USAGE);
            process::exit(2)
        }
    }
}
