//! Degree counting and structural checks over arc lists.

use crate::arc::{Arc, Vertex};

/// Undirected degree: each arc counts once for both endpoints.
pub fn undirected_degrees(n: usize, arcs: &[Arc]) -> Vec<usize> {
    let mut degree = vec![0usize; n];
    for a in arcs {
        degree[a.source] += 1;
        degree[a.destination] += 1;
    }
    degree
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InOut {
    pub incoming: usize,
    pub outgoing: usize,
}

impl InOut {
    /// `outgoing - incoming`; positive means the vertex has arcs to spare.
    pub fn excess(&self) -> isize {
        self.outgoing as isize - self.incoming as isize
    }

    pub fn is_balanced(&self) -> bool {
        self.incoming == self.outgoing
    }
}

pub fn in_out_degrees(n: usize, arcs: &[Arc]) -> Vec<InOut> {
    let mut degree = vec![InOut::default(); n];
    for a in arcs {
        degree[a.source].outgoing += 1;
        degree[a.destination].incoming += 1;
    }
    degree
}

/// Vertices with odd undirected degree, ascending.
pub fn odd_degree_vertices(n: usize, arcs: &[Arc]) -> Vec<Vertex> {
    undirected_degrees(n, arcs)
        .into_iter()
        .enumerate()
        .filter(|(_, d)| d % 2 == 1)
        .map(|(v, _)| v)
        .collect()
}

pub fn is_balanced(n: usize, arcs: &[Arc]) -> bool {
    in_out_degrees(n, arcs).iter().all(InOut::is_balanced)
}

/// `n - 1` arcs that connect all `n` vertices without a cycle.
pub fn is_spanning_tree(n: usize, arcs: &[Arc]) -> bool {
    if n == 0 {
        return arcs.is_empty();
    }
    if arcs.len() != n - 1 {
        return false;
    }
    let mut uf = UnionFind::new(n);
    arcs.iter().all(|a| uf.union(a.source, a.destination))
}

/// Every arc's destination is the next arc's source, wrapping at the end.
pub fn chains_circularly(arcs: &[Arc]) -> bool {
    arcs.iter()
        .zip(arcs.iter().cycle().skip(1))
        .all(|(a, b)| a.destination == b.source)
}

/// `n` chained arcs, each vertex a source exactly once, first arc leaving `start`.
pub fn is_hamiltonian(n: usize, arcs: &[Arc], start: Vertex) -> bool {
    if arcs.len() != n || n < 2 {
        return false;
    }
    if arcs[0].source != start || !chains_circularly(arcs) {
        return false;
    }
    let mut seen = vec![false; n];
    for a in arcs {
        if a.source >= n || std::mem::replace(&mut seen[a.source], true) {
            return false;
        }
    }
    true
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut v: usize) -> usize {
        while self.parent[v] != v {
            self.parent[v] = self.parent[self.parent[v]];
            v = self.parent[v];
        }
        v
    }

    /// Returns false when both vertices were already connected.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}
