#![forbid(unsafe_code)]

//! Distance matrix and arc-list primitives used by `waypath`.
//!
//! Vertices are plain indices into the matrix; every higher-level structure (trees, matchings,
//! circuits) is an ordered `Vec<Arc>`.

pub mod alg;
pub mod arc;
pub mod error;
pub mod matrix;

pub use arc::{Arc, Vertex};
pub use error::MatrixError;
pub use matrix::DistanceMatrix;

/// Sum of `distances[source][destination]` over every arc.
pub fn tour_length(arcs: &[Arc], distances: &DistanceMatrix) -> f64 {
    arcs.iter()
        .map(|a| distances.weight(a.source, a.destination))
        .sum()
}
