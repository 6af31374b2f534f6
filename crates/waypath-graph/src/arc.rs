use serde::{Deserialize, Serialize};
use std::fmt;

/// A vertex is its index in the distance matrix.
pub type Vertex = usize;

/// A directed pair of distinct vertices.
///
/// Arcs also stand in for undirected edges (spanning tree, matching); the direction is whatever
/// the producing stage chose and later stages may reverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arc {
    pub source: Vertex,
    pub destination: Vertex,
}

impl Arc {
    pub fn new(source: Vertex, destination: Vertex) -> Self {
        debug_assert_ne!(source, destination, "arcs never loop on a vertex");
        Self {
            source,
            destination,
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            source: self.destination,
            destination: self.source,
        }
    }

    pub fn touches(&self, v: Vertex) -> bool {
        self.source == v || self.destination == v
    }

    pub fn shares_endpoint(&self, other: &Arc) -> bool {
        self.touches(other.source) || self.touches(other.destination)
    }
}

impl From<(Vertex, Vertex)> for Arc {
    fn from((source, destination): (Vertex, Vertex)) -> Self {
        Self::new(source, destination)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}
