use crate::utils::{cmp_values, max_spread, WrappedFunction};
use ndarray::prelude::*;

/// The working state of a Nelder-Mead run: `n + 1` vertices in `n` dimensions,
/// stored as the rows of a matrix, together with the objective value at each vertex.
///
/// Vertices keep their row index for the whole run. Which one is best or worst is
/// decided by [`ordering`](#method.ordering), recomputed whenever it is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Simplex {
    vertices: Array2<f64>,
    values: Array1<f64>,
}

impl Simplex {
    /// Builds the initial simplex around `x0`. Vertex 0 is `x0` itself and vertex `k + 1`
    /// is `x0` with coordinate `k` moved by `scaling`. Every vertex is evaluated once.
    ///
    /// `x0` must not be empty; outside the crate a simplex comes from
    /// `NelderMead::initial_simplex`, which checks that.
    pub(crate) fn new<F>(x0: ArrayView1<f64>, scaling: f64, func: &mut WrappedFunction<F>) -> Simplex
    where
        F: Fn(ArrayView1<f64>) -> f64,
    {
        let n = x0.len();
        let mut vertices = Array2::<f64>::zeros((n + 1, n));
        for (i, mut row) in vertices.outer_iter_mut().enumerate() {
            row.assign(&x0);
            if i > 0 {
                row[i - 1] += scaling;
            }
        }
        let values = vertices
            .outer_iter()
            .map(|v| func.call(v))
            .collect::<Array1<f64>>();
        Simplex { vertices, values }
    }

    /// Number of coordinates of each vertex.
    pub fn dim(&self) -> usize {
        self.vertices.cols()
    }

    /// Number of vertices, always `dim() + 1`.
    pub fn len(&self) -> usize {
        self.vertices.rows()
    }

    /// Never true for a simplex built from a valid guess.
    pub fn is_empty(&self) -> bool {
        self.vertices.rows() == 0
    }

    pub fn vertices(&self) -> ArrayView2<'_, f64> {
        self.vertices.view()
    }

    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn vertex(&self, i: usize) -> ArrayView1<'_, f64> {
        self.vertices.row(i)
    }

    /// Vertex indices sorted by ascending objective value. The sort is stable, so tied
    /// vertices keep their index order.
    pub fn ordering(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| cmp_values(self.values[a], self.values[b]));
        order
    }

    /// Index of the vertex with the lowest objective value.
    pub fn best(&self) -> usize {
        self.ordering()[0]
    }

    /// Coordinate-wise mean of every vertex except `excluded`.
    pub fn centroid(&self, excluded: usize) -> Array1<f64> {
        let mut centroid = Array1::<f64>::zeros(self.dim());
        for (i, xi) in self.vertices.outer_iter().enumerate() {
            if i != excluded {
                centroid += &xi;
            }
        }
        centroid / self.dim() as f64
    }

    /// Puts `x` with its already known value `fx` in place of vertex `i`.
    pub fn replace(&mut self, i: usize, x: ArrayView1<f64>, fx: f64) {
        self.vertices.row_mut(i).assign(&x);
        self.values[i] = fx;
    }

    /// Moves every vertex except `best` towards it, `x_i <- x_best + sigma * (x_i - x_best)`,
    /// and evaluates the moved vertices. Costs `n` evaluations.
    pub fn shrink<F>(&mut self, best: usize, sigma: f64, func: &mut WrappedFunction<F>)
    where
        F: Fn(ArrayView1<f64>) -> f64,
    {
        let x_best = self.vertices.row(best).to_owned();
        for i in 0..self.len() {
            if i == best {
                continue;
            }
            let moved = &x_best + &(sigma * &(&self.vertices.row(i) - &x_best));
            self.values[i] = func.call(moved.view());
            self.vertices.row_mut(i).assign(&moved);
        }
    }

    /// Largest absolute difference between any vertex value and the best one.
    pub fn spread(&self) -> f64 {
        max_spread(self.values.view(), self.values[self.best()])
    }
}
