//! The staged tour pipeline.
//!
//! Each stage takes the previous stage's arcs by reference and returns its own copy; the
//! distance matrix is only ever read.

use crate::error::{Error, Result};
use crate::graph::{Arc, DistanceMatrix, Vertex, alg, tour_length};
use crate::options::TourOptions;
use crate::{compose, euler, hamiltonian, matching, spanning_tree, two_opt};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Every intermediate arc list of one evaluation, in pipeline order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourResult {
    pub spanning_tree: Vec<Arc>,
    pub matching: Vec<Arc>,
    pub base_cycle: Vec<Arc>,
    pub eulerian_circuit: Vec<Arc>,
    pub hamiltonian_circuit: Vec<Arc>,
    /// Strictly improving 2-opt circuits; the last one is the best tour.
    pub optimized_variants: Vec<Vec<Arc>>,
}

impl TourResult {
    /// The last optimized variant, or the Hamiltonian circuit when 2-opt found nothing better.
    pub fn best(&self) -> &[Arc] {
        self.optimized_variants
            .last()
            .map(Vec::as_slice)
            .unwrap_or(self.hamiltonian_circuit.as_slice())
    }

    pub fn best_length(&self, distances: &DistanceMatrix) -> f64 {
        tour_length(self.best(), distances)
    }

    /// Vertices of the best tour in visiting order, starting at the root.
    pub fn visiting_order(&self) -> Vec<Vertex> {
        self.best().iter().map(|a| a.source).collect()
    }
}

#[derive(Debug, Default, Clone)]
struct StageTimings {
    spanning_tree: Duration,
    matching: Duration,
    eulerian: Duration,
    hamiltonian: Duration,
    two_opt: Duration,
}

pub fn compute_tour(distances: &DistanceMatrix, root: Vertex) -> Result<TourResult> {
    compute_tour_with_options(distances, root, &TourOptions::default())
}

pub fn compute_tour_with_options(
    distances: &DistanceMatrix,
    root: Vertex,
    options: &TourOptions,
) -> Result<TourResult> {
    let n = distances.len();
    if !distances.contains(root) {
        return Err(Error::RootOutOfRange { root, len: n });
    }

    let timing_enabled = std::env::var("WAYPATH_STAGE_TIMING").ok().as_deref() == Some("1");
    let mut timings = StageTimings::default();
    let mut stage_start = timing_enabled.then(Instant::now);
    let mut lap = |slot: &mut Duration| {
        if let Some(s) = stage_start {
            *slot = s.elapsed();
            stage_start = Some(Instant::now());
        }
    };

    let spanning_tree = spanning_tree::minimum_spanning_tree(root, distances)?;
    debug_assert!(alg::is_spanning_tree(n, &spanning_tree));
    lap(&mut timings.spanning_tree);

    let matching = matching::greedy_matching(distances, &spanning_tree)?;
    let base_cycle = compose::base_cycle(&spanning_tree, &matching);
    debug_assert!(alg::odd_degree_vertices(n, &base_cycle).is_empty());
    lap(&mut timings.matching);

    let eulerian_circuit = euler::eulerian_circuit_from_cycle(n, root, &base_cycle)?;
    lap(&mut timings.eulerian);

    let hamiltonian_circuit = hamiltonian::hamiltonian_circuit(root, &eulerian_circuit, distances);
    debug_assert!(n < 2 || alg::is_hamiltonian(n, &hamiltonian_circuit, root));
    lap(&mut timings.hamiltonian);

    let optimized_variants = two_opt::optimize(&hamiltonian_circuit, distances, &options.two_opt);
    lap(&mut timings.two_opt);

    if timing_enabled {
        tracing::debug!(
            spanning_tree = ?timings.spanning_tree,
            matching = ?timings.matching,
            eulerian = ?timings.eulerian,
            hamiltonian = ?timings.hamiltonian,
            two_opt = ?timings.two_opt,
            vertices = n,
            "stage timings"
        );
    }

    Ok(TourResult {
        spanning_tree,
        matching,
        base_cycle,
        eulerian_circuit,
        hamiltonian_circuit,
        optimized_variants,
    })
}
