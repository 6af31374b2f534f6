//! Greedy pairing of the spanning tree's odd-degree vertices.
//!
//! This is a nearest-available heuristic, not a minimum-weight perfect matching, so the
//! classical 3/2 bound of Christofides does not carry over.

use crate::error::{Error, Result};
use crate::graph::{Arc, DistanceMatrix, alg};

/// Pairs the first unmatched odd vertex with its nearest unmatched odd peer until none remain.
///
/// Odd vertices are taken in ascending order; ties go to the earliest candidate. Every vertex
/// appears in at most one returned arc.
pub fn greedy_matching(distances: &DistanceMatrix, tree: &[Arc]) -> Result<Vec<Arc>> {
    let mut odd = alg::odd_degree_vertices(distances.len(), tree);
    let mut matching: Vec<Arc> = Vec::with_capacity(odd.len() / 2);

    while !odd.is_empty() {
        // Unreachable by the handshake lemma, but an odd count would leave a vertex unpaired.
        if odd.len() % 2 == 1 {
            return Err(Error::OddMatchingCount {
                remaining: odd.len(),
            });
        }

        let source = odd[0];
        let mut nearest = 1;
        for (i, &candidate) in odd.iter().enumerate().skip(2) {
            if distances.weight(source, candidate) < distances.weight(source, odd[nearest]) {
                nearest = i;
            }
        }
        let destination = odd.remove(nearest);
        odd.remove(0);
        matching.push(Arc::new(source, destination));
    }

    tracing::debug!(pairs = matching.len(), "odd vertices matched");
    Ok(matching)
}
