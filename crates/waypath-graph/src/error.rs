#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("negative distance {weight} at ({row}, {column})")]
    NegativeWeight {
        row: usize,
        column: usize,
        weight: f64,
    },

    #[error("distance at ({row}, {column}) is not a number")]
    NaNWeight { row: usize, column: usize },
}
