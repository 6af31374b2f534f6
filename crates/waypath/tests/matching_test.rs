use waypath::compose::base_cycle;
use waypath::graph::{Arc, DistanceMatrix, alg};
use waypath::matching::greedy_matching;

fn sample() -> DistanceMatrix {
    DistanceMatrix::new(vec![
        vec![0.0, 7.0, 4.0, 10.0, 10.0],
        vec![7.0, 0.0, 6.0, 7.0, 1.0],
        vec![4.0, 6.0, 0.0, 16.0, 2.0],
        vec![10.0, 7.0, 16.0, 0.0, 6.0],
        vec![10.0, 1.0, 2.0, 6.0, 0.0],
    ])
    .unwrap()
}

fn arcs(pairs: &[(usize, usize)]) -> Vec<Arc> {
    pairs.iter().copied().map(Arc::from).collect()
}

#[test]
fn matching_pairs_each_odd_vertex_with_its_nearest_peer() {
    let tree = arcs(&[(0, 2), (2, 4), (4, 1), (4, 3)]);
    assert_eq!(alg::odd_degree_vertices(5, &tree), vec![0, 1, 3, 4]);

    let matching = greedy_matching(&sample(), &tree).unwrap();
    assert_eq!(matching, arcs(&[(0, 1), (3, 4)]));
}

#[test]
fn matching_keeps_the_first_candidate_on_ties() {
    let m = DistanceMatrix::new(vec![
        vec![0.0, 2.0, 2.0, 2.0],
        vec![2.0, 0.0, 2.0, 2.0],
        vec![2.0, 2.0, 0.0, 2.0],
        vec![2.0, 2.0, 2.0, 0.0],
    ])
    .unwrap();
    // Star around 0: vertices 0, 1, 2, 3 all have odd degree.
    let tree = arcs(&[(0, 1), (0, 2), (0, 3)]);
    assert_eq!(alg::odd_degree_vertices(4, &tree), vec![0, 1, 2, 3]);
    assert_eq!(
        greedy_matching(&m, &tree).unwrap(),
        arcs(&[(0, 1), (2, 3)])
    );
}

#[test]
fn matching_of_a_path_joins_its_two_ends() {
    let tree = arcs(&[(0, 2), (2, 4), (4, 1), (1, 3)]);
    assert_eq!(
        greedy_matching(&sample(), &tree).unwrap(),
        arcs(&[(0, 3)])
    );
}

#[test]
fn base_cycle_appends_matching_after_tree_and_evens_all_degrees() {
    let tree = arcs(&[(0, 2), (2, 4), (4, 1), (4, 3)]);
    let matching = arcs(&[(0, 1), (3, 4)]);
    let cycle = base_cycle(&tree, &matching);
    assert_eq!(
        cycle,
        arcs(&[(0, 2), (2, 4), (4, 1), (4, 3), (0, 1), (3, 4)])
    );
    assert!(
        alg::undirected_degrees(5, &cycle)
            .iter()
            .all(|d| d % 2 == 0)
    );
}

#[test]
fn base_cycle_keeps_duplicate_edges() {
    let tree = arcs(&[(0, 1)]);
    let matching = arcs(&[(0, 1)]);
    assert_eq!(base_cycle(&tree, &matching), arcs(&[(0, 1), (0, 1)]));
}
