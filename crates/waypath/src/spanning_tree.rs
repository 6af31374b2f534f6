//! Prim-style minimum spanning tree grown from a root vertex.

use crate::error::{Error, Result};
use crate::graph::{Arc, DistanceMatrix, Vertex};

/// Builds the `n - 1` tree arcs in the order they are added, each directed away from the tree.
///
/// At every step the cheapest arc leaving the included set is taken. Ties go to the first arc
/// in (source ascending, destination ascending) order, which makes the result deterministic.
pub fn minimum_spanning_tree(root: Vertex, distances: &DistanceMatrix) -> Result<Vec<Arc>> {
    let n = distances.len();
    if !distances.contains(root) {
        return Err(Error::RootOutOfRange { root, len: n });
    }

    let mut in_tree = vec![false; n];
    // Cheapest known connection of each outside vertex into the tree: (weight, tree source).
    let mut best: Vec<Option<(f64, Vertex)>> = vec![None; n];
    let mut tree: Vec<Arc> = Vec::with_capacity(n.saturating_sub(1));

    let mut added = root;
    in_tree[root] = true;
    for _ in 1..n {
        relax(distances, added, &in_tree, &mut best);

        let mut next: Option<(f64, Vertex, Vertex)> = None;
        for (w, entry) in best.iter().enumerate() {
            let Some((weight, source)) = *entry else {
                continue;
            };
            if in_tree[w] {
                continue;
            }
            let better = match next {
                None => true,
                Some((bw, bs, _)) => weight < bw || (weight == bw && source < bs),
            };
            if better {
                next = Some((weight, source, w));
            }
        }

        let Some((_, source, destination)) = next else {
            return Err(Error::DisconnectedGraph {
                root,
                reached: tree.len() + 1,
                len: n,
            });
        };
        in_tree[destination] = true;
        tree.push(Arc::new(source, destination));
        added = destination;
    }

    tracing::debug!(
        root,
        arcs = tree.len(),
        weight = crate::graph::tour_length(&tree, distances),
        "spanning tree built"
    );
    Ok(tree)
}

fn relax(
    distances: &DistanceMatrix,
    added: Vertex,
    in_tree: &[bool],
    best: &mut [Option<(f64, Vertex)>],
) {
    for (w, &weight) in distances.row(added).iter().enumerate() {
        if in_tree[w] || !weight.is_finite() {
            continue;
        }
        let replace = match best[w] {
            None => true,
            Some((bw, bs)) => weight < bw || (weight == bw && added < bs),
        };
        if replace {
            best[w] = Some((weight, added));
        }
    }
}
