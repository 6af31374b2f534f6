use waypath_graph::{Arc, DistanceMatrix, MatrixError, tour_length};

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

#[test]
fn matrix_exposes_dimension_and_weights() {
    let m = sample();
    assert_eq!(m.len(), 5);
    assert!(!m.is_empty());
    assert_eq!(m.weight(0, 2), 4.0);
    assert_eq!(m.weight(3, 2), 16.0);
    assert_eq!(m.row(4), &[10.0, 1.0, 2.0, 6.0, 0.0]);
    assert_eq!(m.rows().count(), 5);
    assert!(m.contains(4));
    assert!(!m.contains(5));
}

#[test]
fn matrix_rejects_ragged_rows() {
    let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::NotSquare {
            row: 1,
            len: 1,
            expected: 2
        }
    );
}

#[test]
fn matrix_rejects_negative_and_nan_weights() {
    let err = DistanceMatrix::new(vec![vec![0.0, -1.0], vec![-1.0, 0.0]]).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::NegativeWeight {
            row: 0,
            column: 1,
            ..
        }
    ));

    let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![f64::NAN, 0.0]]).unwrap_err();
    assert_eq!(err, MatrixError::NaNWeight { row: 1, column: 0 });
}

#[test]
fn matrix_accepts_infinite_weights_as_missing_connections() {
    let m = DistanceMatrix::new(vec![vec![0.0, f64::INFINITY], vec![f64::INFINITY, 0.0]]).unwrap();
    assert!(m.weight(0, 1).is_infinite());
}

#[test]
fn empty_matrix_has_no_rows() {
    let m = DistanceMatrix::new(Vec::new()).unwrap();
    assert!(m.is_empty());
    assert_eq!(m.rows().count(), 0);
}

#[test]
fn matrix_deserializes_from_json_rows_with_validation() {
    let m: DistanceMatrix = serde_json::from_str("[[0, 3], [3, 0]]").unwrap();
    assert_eq!(m.weight(1, 0), 3.0);

    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[0.0,3.0],[3.0,0.0]]");

    assert!(serde_json::from_str::<DistanceMatrix>("[[0, 3]]").is_err());
    assert!(serde_json::from_str::<DistanceMatrix>("[[0, -3], [-3, 0]]").is_err());
}

#[test]
fn tour_length_sums_arc_weights() {
    let m = sample();
    let tour: Vec<Arc> = [(0, 2), (2, 4), (4, 1), (1, 3), (3, 0)]
        .into_iter()
        .map(Arc::from)
        .collect();
    assert_eq!(tour_length(&tour, &m), 4.0 + 2.0 + 1.0 + 7.0 + 10.0);
    assert_eq!(tour_length(&[], &m), 0.0);
}
