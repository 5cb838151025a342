use crate::error::{Result, SimplexError};
use ndarray::prelude::*;
use std::cmp::Ordering;

/// An objective function that counts how often it has been called.
pub struct WrappedFunction<F: Fn(ArrayView1<f64>) -> f64> {
    pub num: usize,
    pub func: F,
}

impl<F: Fn(ArrayView1<f64>) -> f64> WrappedFunction<F> {
    pub fn new(func: F) -> Self {
        WrappedFunction { num: 0, func }
    }

    pub fn call(&mut self, arg: ArrayView1<f64>) -> f64 {
        self.num += 1;
        (self.func)(arg)
    }
}

/// Largest absolute difference between `values` and `reference`.
///
/// A NaN anywhere makes the result NaN, so it never passes a `< tolerance` test.
pub fn max_spread(values: ArrayView1<f64>, reference: f64) -> f64 {
    values
        .iter()
        .map(|&v| (v - reference).abs())
        .fold(0., |acc: f64, d| {
            if acc.is_nan() || d.is_nan() {
                f64::NAN
            } else {
                acc.max(d)
            }
        })
}

/// Ascending order of objective values with NaN placed after every number.
pub fn cmp_values(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| match (a.is_nan(), b.is_nan()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    })
}

/// Reads a point written as comma-separated floats, e.g. `"1.5, -2,0"`.
pub fn parse_point(text: &str) -> Result<Array1<f64>> {
    let coords = text
        .split(',')
        .map(str::trim)
        .map(|c| {
            c.parse::<f64>().map_err(|_| SimplexError::InvalidPoint {
                message: format!("'{}' is not a number", c),
            })
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok(Array1::from_vec(coords))
}

#[cfg(test)]
mod tests {

    use super::*;
    use float_cmp::ApproxEq;

    #[test]
    fn counts_calls() {
        let mut f = WrappedFunction::new(|x: ArrayView1<f64>| x[0] * 2.0);
        let x = arr1(&[1.5]);
        assert!(f.call(x.view()).approx_eq(&3.0, 1e-12, 2));
        f.call(x.view());
        assert_eq!(f.num, 2);
    }

    #[test]
    fn spread() {
        let values = arr1(&[1.0, 4.0, -0.5]);
        assert_eq!(max_spread(values.view(), 1.0), 3.0);
        assert_eq!(max_spread(arr1(&[2.0]).view(), 2.0), 0.0);
    }

    #[test]
    fn spread_nan_is_sticky() {
        assert!(max_spread(arr1(&[0.0, f64::NAN, 5.0]).view(), 0.0).is_nan());
        assert!(max_spread(arr1(&[0.0, 1.0]).view(), f64::NAN).is_nan());
        let inf = f64::INFINITY;
        assert!(!(max_spread(arr1(&[inf, inf]).view(), inf) < 1.0));
    }

    #[test]
    fn nan_orders_last() {
        assert_eq!(cmp_values(1.0, 2.0), Ordering::Less);
        assert_eq!(cmp_values(-0.0, 0.0), Ordering::Equal);
        assert_eq!(cmp_values(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(cmp_values(3.0, f64::NAN), Ordering::Less);
        assert_eq!(cmp_values(f64::NAN, f64::NAN), Ordering::Equal);
    }

    #[test]
    fn parse() {
        let x = parse_point(" 1.5, -2,0 ").unwrap();
        assert_eq!(x, arr1(&[1.5, -2.0, 0.0]));
        match parse_point("1,,2") {
            Err(SimplexError::InvalidPoint { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse_point("").is_err());
    }
}
