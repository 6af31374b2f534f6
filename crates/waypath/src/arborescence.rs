//! Anti-arborescence: a spanning tree of arcs all directed toward the root.

use crate::error::{Error, Result};
use crate::graph::{Arc, Vertex};

/// Picks, for every vertex other than `root`, one outgoing arc leading toward `root`.
///
/// Vertices are discovered breadth-first from the root by walking arcs backwards; the arc that
/// discovered a vertex becomes its tree arc. Returns indices into `arcs` (not arc values) so
/// parallel arcs stay distinguishable.
pub fn anti_arborescence(root: Vertex, n: usize, arcs: &[Arc]) -> Result<Vec<usize>> {
    let mut in_arcs: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (index, arc) in arcs.iter().enumerate() {
        in_arcs[arc.destination].push(index);
    }

    let mut seen = vec![false; n];
    seen[root] = true;
    let mut order: Vec<Vertex> = vec![root];
    let mut tree: Vec<usize> = Vec::with_capacity(n.saturating_sub(1));

    let mut next = 0;
    while next < order.len() && order.len() < n {
        let destination = order[next];
        next += 1;
        for &index in &in_arcs[destination] {
            let source = arcs[index].source;
            if !seen[source] {
                seen[source] = true;
                order.push(source);
                tree.push(index);
            }
        }
    }

    if order.len() < n {
        return Err(Error::DisconnectedGraph {
            root,
            reached: order.len(),
            len: n,
        });
    }
    Ok(tree)
}
