use crate::graph::{MatrixError, Vertex};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] MatrixError),

    #[error("root vertex {root} is out of range for {len} vertices")]
    RootOutOfRange { root: Vertex, len: usize },

    #[error("graph is disconnected: {reached} of {len} vertices reachable from {root}")]
    DisconnectedGraph {
        root: Vertex,
        reached: usize,
        len: usize,
    },

    #[error(
        "the minimum matching edges cannot be found: an even number of odd degree vertices is required (found {remaining})"
    )]
    OddMatchingCount { remaining: usize },

    #[error(transparent)]
    Balance(#[from] BalanceError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceError {
    #[error("merged edge set has odd degree at vertices {vertices:?}")]
    OddDegree { vertices: Vec<Vertex> },

    #[error("circuit cannot be balanced: no path between unbalanced vertices could be found")]
    Unbalanceable { unbalanced: Vec<Vertex> },

    #[error("no usable augmenting path: every path found was already reversed once")]
    NoUsableAugmentingPath,

    #[error("eulerian walk stranded at vertex {vertex} with {remaining} arcs left")]
    StrandedWalk { vertex: Vertex, remaining: usize },
}
