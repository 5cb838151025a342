extern crate downhill;
extern crate ndarray;

use downhill::vector::NelderMeadBuilder;
use downhill::Minimizer;
use ndarray::prelude::*;

fn main() {
        let nm = NelderMeadBuilder::default()
                .tolerance(1e-12)
                .scaling(0.5)
                .max_iter(5000)
                .build()
                .unwrap();
        let f = |x: ArrayView1<f64>| (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2);

        let x0 = arr1(&[-1.2, 1.0]);
        let res = nm.minimize(&f, x0.view()).unwrap();

        println!("{:?}", res.status);
        println!("{:?}", res.minimum);
}
