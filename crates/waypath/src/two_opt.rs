//! 2-opt refinement of a Hamiltonian circuit.

use crate::graph::{Arc, DistanceMatrix};
use crate::options::TwoOptOptions;
use indexmap::IndexSet;

/// An exchange must shorten the tour by more than this fraction of the removed length. Two
/// reconnections of equal real length can differ by an ulp once summed in a different order.
const MIN_RELATIVE_GAIN: f64 = 1e-12;

/// Runs 2-opt from `circuit` and returns every distinct improved circuit in discovery order.
///
/// The scan walks positions `i = 0, 1, ...`; at each position the first non-adjacent arc whose
/// exchange shortens the tour is applied and, when the result is new, the scan restarts at 0.
/// Each returned circuit is strictly shorter than the one before it, so the last entry is the
/// best tour found. An empty result means `circuit` was already 2-optimal.
pub fn optimize(
    circuit: &[Arc],
    distances: &DistanceMatrix,
    options: &TwoOptOptions,
) -> Vec<Vec<Arc>> {
    let mut oc = circuit.to_vec();
    let mut variants: IndexSet<Vec<Arc>> = IndexSet::new();
    let mut moves = 0usize;

    let mut i = 0;
    while i < oc.len() {
        if options.max_moves.is_some_and(|max| moves >= max) {
            tracing::warn!(moves, "2-opt move limit reached before a local optimum");
            break;
        }

        let Some((j, delta)) = find_improving_move(&oc, i, distances) else {
            i += 1;
            continue;
        };
        tracing::trace!(i, j, delta, "2-opt move");
        exchange(&mut oc, i, j);
        moves += 1;

        if variants.insert(oc.clone()) {
            i = 0;
        } else {
            i += 1;
        }
    }

    tracing::debug!(moves, variants = variants.len(), "2-opt finished");
    variants.into_iter().collect()
}

/// First arc not touching `circuit[i]` whose exchange with it lowers the tour length, with the
/// (negative) length change.
fn find_improving_move(circuit: &[Arc], i: usize, distances: &DistanceMatrix) -> Option<(usize, f64)> {
    let current = circuit[i];
    circuit
        .iter()
        .enumerate()
        .filter(|(_, candidate)| !candidate.shares_endpoint(&current))
        .find_map(|(j, candidate)| {
            let removed = distances.weight(current.source, current.destination)
                + distances.weight(candidate.source, candidate.destination);
            let added = distances.weight(current.source, candidate.source)
                + distances.weight(current.destination, candidate.destination);
            let delta = added - removed;
            (delta < -MIN_RELATIVE_GAIN * removed.max(1.0)).then_some((j, delta))
        })
}

/// Replaces `a -> b` and `c -> d` (in circuit order) with `a -> c` and `b -> d`, reversing the
/// `b ... c` stretch between them so the circuit still chains.
///
/// Positions are ordered first, so the earlier position always keeps its source and the first
/// arc of the circuit keeps leaving the start vertex.
fn exchange(circuit: &mut [Arc], i: usize, j: usize) {
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let first = circuit[lo];
    let second = circuit[hi];

    circuit[lo] = Arc::new(first.source, second.source);
    circuit[hi] = Arc::new(first.destination, second.destination);

    let between = &mut circuit[lo + 1..hi];
    between.reverse();
    for arc in between {
        *arc = arc.reversed();
    }
}
