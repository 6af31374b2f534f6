//! Reduce an Eulerian circuit to a Hamiltonian one by shortcutting repeated visits.

use crate::graph::{Arc, DistanceMatrix, Vertex};

/// One visit of a vertex `v`: the arc at `index` ends at `v` and the next arc (wrapping to the
/// first) leaves it. Shortcutting replaces `from -> v -> to` with `from -> to`.
#[derive(Debug, Clone, Copy)]
struct Shortcut {
    index: usize,
    from: Vertex,
    to: Vertex,
}

/// Shortcuts every vertex visited more than once until each is visited exactly once, then
/// rotates the circuit so that its first arc leaves `root`.
///
/// Vertices are handled in ascending order. For a vertex with `k` visits, the `k - 1` cheapest
/// `from -> to` shortcuts are applied greedily.
pub fn hamiltonian_circuit(root: Vertex, circuit: &[Arc], distances: &DistanceMatrix) -> Vec<Arc> {
    let mut hc = circuit.to_vec();

    for v in multi_pass_vertices(distances.len(), &hc) {
        let mut candidates = shortcut_candidates(v, &hc);
        let needed = candidates.len().saturating_sub(1);

        for _ in 0..needed {
            let mut best = 0;
            for (i, c) in candidates.iter().enumerate().skip(1) {
                let current = &candidates[best];
                if distances.weight(c.from, c.to) < distances.weight(current.from, current.to) {
                    best = i;
                }
            }
            let shortcut = candidates.remove(best);
            let (pivot, shift) = apply_shortcut(&mut hc, shortcut);
            for c in &mut candidates {
                if c.index > pivot {
                    c.index -= shift;
                }
            }
        }
    }

    if let Some(start) = hc.iter().position(|a| a.source == root) {
        hc.rotate_left(start);
    }

    tracing::debug!(
        root,
        arcs = hc.len(),
        length = crate::graph::tour_length(&hc, distances),
        "hamiltonian circuit reduced"
    );
    hc
}

/// Vertices occurring more than twice as an arc endpoint, ascending.
fn multi_pass_vertices(n: usize, circuit: &[Arc]) -> Vec<Vertex> {
    let mut passes = vec![0usize; n];
    for a in circuit {
        passes[a.source] += 1;
        passes[a.destination] += 1;
    }
    (0..n).filter(|&v| passes[v] > 2).collect()
}

fn shortcut_candidates(v: Vertex, circuit: &[Arc]) -> Vec<Shortcut> {
    let len = circuit.len();
    circuit
        .iter()
        .enumerate()
        .filter_map(|(index, incoming)| {
            let outgoing = circuit[(index + 1) % len];
            (incoming.destination == v && outgoing.source == v).then_some(Shortcut {
                index,
                from: incoming.source,
                to: outgoing.destination,
            })
        })
        .collect()
}

/// Splices `shortcut` into `circuit` and returns `(pivot, shift)`: positions after `pivot`
/// moved down by `shift`.
///
/// A shortcut back to where it came from (`a -> v -> a`) drops both arcs instead of inserting a
/// self-loop. At the last position the consumed pair wraps to the first arc, so the first arc
/// goes too and the new arc is appended.
fn apply_shortcut(circuit: &mut Vec<Arc>, shortcut: Shortcut) -> (usize, usize) {
    let Shortcut { index, from, to } = shortcut;
    if index + 1 < circuit.len() {
        if from == to {
            circuit.drain(index..index + 2);
            (index, 2)
        } else {
            circuit[index] = Arc::new(from, to);
            circuit.remove(index + 1);
            (index, 1)
        }
    } else {
        circuit.pop();
        circuit.remove(0);
        if from != to {
            circuit.push(Arc::new(from, to));
        }
        (0, 1)
    }
}
