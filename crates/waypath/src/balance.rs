//! Orient an even-degree multigraph so that every vertex has in-degree == out-degree.
//!
//! The merged tree + matching arcs keep whatever direction their stage gave them. Balancing
//! reverses arcs until the directed multigraph admits an Eulerian circuit:
//!
//! 1. neighbor swap: reverse one arc between two adjacent unbalanced vertices,
//! 2. path swap: reverse every arc of a directed path from a vertex with surplus out-arcs to a
//!    vertex with surplus in-arcs.
//!
//! Both moves only fire in the direction that shrinks the imbalance of both ends, so each one
//! lowers the total imbalance by four and the loop ends after finitely many moves. The consumed
//! neighbor set and the applied path set still guard against repeating a move.

use crate::error::{BalanceError, Result};
use crate::graph::{Arc, Vertex, alg};
use rustc_hash::FxHashSet;

/// Arc index plus the orientation it had when the path was reversed.
type PathKey = Vec<(usize, Arc)>;

/// Returns a balanced copy of `arcs`. Arc positions are kept; only directions change.
pub fn balance(n: usize, arcs: &[Arc]) -> Result<Vec<Arc>> {
    let odd = alg::odd_degree_vertices(n, arcs);
    if !odd.is_empty() {
        return Err(BalanceError::OddDegree { vertices: odd }.into());
    }

    let mut circuit = arcs.to_vec();
    let mut consumed_neighbors: FxHashSet<Vertex> = FxHashSet::default();
    let mut applied_paths: FxHashSet<PathKey> = FxHashSet::default();
    let mut neighbor_swaps = 0usize;
    let mut path_swaps = 0usize;

    loop {
        let excess: Vec<isize> = alg::in_out_degrees(n, &circuit)
            .iter()
            .map(alg::InOut::excess)
            .collect();
        let unbalanced: Vec<Vertex> = (0..n).filter(|&v| excess[v] != 0).collect();
        if unbalanced.is_empty() {
            break;
        }

        if let Some((index, neighbor)) =
            find_neighbor_swap(&circuit, &excess, &unbalanced, &consumed_neighbors)
        {
            tracing::trace!(arc = %circuit[index], "neighbor swap");
            consumed_neighbors.insert(neighbor);
            circuit[index] = circuit[index].reversed();
            neighbor_swaps += 1;
            continue;
        }

        swap_augmenting_path(n, &mut circuit, &excess, &unbalanced, &mut applied_paths)?;
        path_swaps += 1;
    }

    tracing::debug!(
        arcs = circuit.len(),
        neighbor_swaps,
        path_swaps,
        "circuit balanced"
    );
    Ok(circuit)
}

/// First arc joining an unbalanced vertex to an unconsumed unbalanced neighbor whose reversal
/// moves both endpoints toward balance.
fn find_neighbor_swap(
    circuit: &[Arc],
    excess: &[isize],
    unbalanced: &[Vertex],
    consumed: &FxHashSet<Vertex>,
) -> Option<(usize, Vertex)> {
    for &v in unbalanced {
        for (index, arc) in circuit.iter().enumerate() {
            let neighbor = if arc.source == v {
                arc.destination
            } else if arc.destination == v {
                arc.source
            } else {
                continue;
            };
            if consumed.contains(&neighbor) {
                continue;
            }
            if excess[arc.source] > 0 && excess[arc.destination] < 0 {
                return Some((index, neighbor));
            }
        }
    }
    None
}

fn swap_augmenting_path(
    n: usize,
    circuit: &mut [Arc],
    excess: &[isize],
    unbalanced: &[Vertex],
    applied_paths: &mut FxHashSet<PathKey>,
) -> Result<()> {
    let mut out_arcs: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (index, arc) in circuit.iter().enumerate() {
        out_arcs[arc.source].push(index);
    }
    let is_target: Vec<bool> = excess.iter().map(|&e| e < 0).collect();

    let mut found_repeat = false;
    for &start in unbalanced.iter().filter(|&&v| excess[v] > 0) {
        let Some(path) = find_path(circuit, &out_arcs, &is_target, start) else {
            continue;
        };
        let key: PathKey = path.iter().map(|&ix| (ix, circuit[ix])).collect();
        if applied_paths.contains(&key) {
            found_repeat = true;
            continue;
        }

        tracing::trace!(start, len = path.len(), "path swap");
        for &ix in &path {
            circuit[ix] = circuit[ix].reversed();
        }
        applied_paths.insert(key);
        return Ok(());
    }

    if found_repeat {
        Err(BalanceError::NoUsableAugmentingPath.into())
    } else {
        Err(BalanceError::Unbalanceable {
            unbalanced: unbalanced.to_vec(),
        }
        .into())
    }
}

/// Depth-first search along outgoing arcs from `start` to any target vertex, never revisiting a
/// vertex. Returns the arc indices of the path.
///
/// The stack holds `(vertex, next outgoing arc to try)`; `path[k]` is the arc leaving
/// `stack[k]`, so the stack never grows past the vertex count.
fn find_path(
    circuit: &[Arc],
    out_arcs: &[Vec<usize>],
    is_target: &[bool],
    start: Vertex,
) -> Option<Vec<usize>> {
    let mut visited = vec![false; out_arcs.len()];
    visited[start] = true;
    let mut stack: Vec<(Vertex, usize)> = vec![(start, 0)];
    let mut path: Vec<usize> = Vec::new();

    while let Some(top) = stack.last_mut() {
        let (v, cursor) = *top;
        let Some(&ix) = out_arcs[v].get(cursor) else {
            stack.pop();
            path.pop();
            continue;
        };
        top.1 += 1;

        let w = circuit[ix].destination;
        if is_target[w] {
            path.push(ix);
            return Some(path);
        }
        if !visited[w] {
            visited[w] = true;
            path.push(ix);
            stack.push((w, 0));
        }
    }
    None
}
