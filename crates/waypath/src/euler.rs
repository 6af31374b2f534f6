//! Eulerian circuit construction on a balanced multigraph (BEST theorem construction).
//!
//! Every outgoing arc gets a priority; the anti-arborescence arc of a vertex is always used
//! last. Walking from the root and always taking the lowest unused priority then consumes every
//! arc exactly once and ends back at the root, with no backtracking.

use crate::error::{BalanceError, Result};
use crate::graph::{Arc, Vertex, alg};
use crate::{arborescence, balance};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkedArc {
    pub arc: Arc,
    /// 1-based; lower is walked first.
    pub priority: usize,
}

/// Marks each vertex's outgoing arcs, vertex by vertex in ascending order.
///
/// Arcs outside the anti-arborescence get `1, 2, ...` in list order; the arborescence arc gets
/// the vertex's out-degree, the highest number.
pub fn mark_arcs(n: usize, arcs: &[Arc], anti_arborescence: &[usize]) -> Vec<MarkedArc> {
    let mut in_tree = vec![false; arcs.len()];
    for &index in anti_arborescence {
        in_tree[index] = true;
    }

    let mut out_arcs: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (index, arc) in arcs.iter().enumerate() {
        out_arcs[arc.source].push(index);
    }

    let mut marked: Vec<MarkedArc> = Vec::with_capacity(arcs.len());
    for outgoing in &out_arcs {
        let mut next = 1;
        for &index in outgoing {
            let priority = if in_tree[index] {
                outgoing.len()
            } else {
                next += 1;
                next - 1
            };
            marked.push(MarkedArc {
                arc: arcs[index],
                priority,
            });
        }
    }
    marked
}

/// Walks from `root`, always taking the unused outgoing arc with the lowest priority (earliest
/// in `marked` on ties).
pub fn eulerian_circuit(root: Vertex, marked: &[MarkedArc]) -> Result<Vec<Arc>> {
    let n = marked
        .iter()
        .map(|m| m.arc.source.max(m.arc.destination) + 1)
        .max()
        .unwrap_or(0)
        .max(root + 1);

    let mut queues: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (index, m) in marked.iter().enumerate() {
        queues[m.arc.source].push(index);
    }
    for queue in &mut queues {
        // Stable, so equal priorities keep list order.
        queue.sort_by_key(|&index| marked[index].priority);
    }
    let mut cursor = vec![0usize; n];

    let mut circuit: Vec<Arc> = Vec::with_capacity(marked.len());
    let mut vertex = root;
    while circuit.len() < marked.len() {
        let Some(&index) = queues[vertex].get(cursor[vertex]) else {
            return Err(BalanceError::StrandedWalk {
                vertex,
                remaining: marked.len() - circuit.len(),
            }
            .into());
        };
        cursor[vertex] += 1;
        let arc = marked[index].arc;
        circuit.push(arc);
        vertex = arc.destination;
    }

    Ok(circuit)
}

/// Balances the merged edge set, then builds the Eulerian circuit from `root`.
pub fn eulerian_circuit_from_cycle(n: usize, root: Vertex, base_cycle: &[Arc]) -> Result<Vec<Arc>> {
    let balanced = balance::balance(n, base_cycle)?;
    debug_assert!(alg::is_balanced(n, &balanced));

    let tree = arborescence::anti_arborescence(root, n, &balanced)?;
    let marked = mark_arcs(n, &balanced, &tree);
    let circuit = eulerian_circuit(root, &marked)?;

    debug_assert_eq!(circuit.len(), balanced.len());
    debug_assert!(alg::chains_circularly(&circuit));
    tracing::debug!(root, arcs = circuit.len(), "eulerian circuit found");
    Ok(circuit)
}
