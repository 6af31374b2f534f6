#![forbid(unsafe_code)]

//! Approximate shortest closed tours over a distance matrix.
//!
//! The pipeline follows Christofides' construction with a greedy matching:
//!
//! 1. minimum spanning tree from the root ([`spanning_tree`]),
//! 2. nearest-available pairing of odd-degree vertices ([`matching`]),
//! 3. tree + matching merged into an even-degree multigraph ([`compose`]),
//! 4. arcs oriented until every vertex is balanced ([`balance`]),
//! 5. Eulerian circuit via anti-arborescence arc priorities ([`arborescence`], [`euler`]),
//! 6. repeated visits shortcut into a Hamiltonian circuit ([`hamiltonian`]),
//! 7. 2-opt refinement ([`two_opt`]).
//!
//! [`compute_tour`] runs all stages and returns every intermediate arc list.

pub use waypath_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod arborescence;
pub mod balance;
pub mod compose;
pub mod error;
pub mod euler;
pub mod hamiltonian;
pub mod matching;
pub mod options;
pub mod pipeline;
pub mod spanning_tree;
pub mod two_opt;

pub use error::{BalanceError, Error, Result};
pub use graph::{Arc, DistanceMatrix, Vertex, tour_length};
pub use options::{TourOptions, TwoOptOptions};
pub use pipeline::{TourResult, compute_tour, compute_tour_with_options};
