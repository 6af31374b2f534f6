use crate::arc::Vertex;
use crate::error::MatrixError;
use serde::{Deserialize, Serialize};

/// Immutable square matrix of non-negative distances.
///
/// Symmetry and a zero diagonal are assumed, not enforced. `f64::INFINITY` marks a missing
/// direct connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    n: usize,
    weights: Vec<f64>,
}

impl DistanceMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut weights: Vec<f64> = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            for (column, weight) in values.into_iter().enumerate() {
                if weight.is_nan() {
                    return Err(MatrixError::NaNWeight { row, column });
                }
                if weight < 0.0 {
                    return Err(MatrixError::NegativeWeight {
                        row,
                        column,
                        weight,
                    });
                }
                weights.push(weight);
            }
        }
        Ok(Self { n, weights })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn contains(&self, v: Vertex) -> bool {
        v < self.n
    }

    /// # Panics
    ///
    /// When either vertex is out of range.
    #[inline]
    pub fn weight(&self, source: Vertex, destination: Vertex) -> f64 {
        assert!(
            source < self.n && destination < self.n,
            "vertex out of range: ({source}, {destination}) in a {n}x{n} matrix",
            n = self.n
        );
        self.weights[source * self.n + destination]
    }

    pub fn row(&self, source: Vertex) -> &[f64] {
        &self.weights[source * self.n..(source + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // `chunks(0)` panics, and an empty matrix has no rows anyway.
        self.weights.chunks(self.n.max(1))
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(m: DistanceMatrix) -> Self {
        m.rows().map(<[f64]>::to_vec).collect()
    }
}
