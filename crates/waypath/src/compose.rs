use crate::graph::Arc;

/// Tree arcs followed by matching arcs, duplicates kept. Every vertex ends up with even degree.
pub fn base_cycle(tree: &[Arc], matching: &[Arc]) -> Vec<Arc> {
    let mut cycle = Vec::with_capacity(tree.len() + matching.len());
    cycle.extend_from_slice(tree);
    cycle.extend_from_slice(matching);
    cycle
}
