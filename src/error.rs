use faer::sparse::CreationError;
use thiserror::Error;

// Unified error type for krystal

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("empty matrix ({rows}x{cols})")]
    EmptyMatrix { rows: usize, cols: usize },
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is not symmetric: entry ({row}, {col}) differs from ({col}, {row})")]
    NotSymmetric { row: usize, col: usize },
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("decomposition did not converge: {0}")]
    NotConverged(String),
    #[error("backend rejected its arguments (status {status})")]
    BackendContract { status: i32 },
    #[error("malformed sparse structure: {0}")]
    MalformedSparse(String),
}

impl From<CreationError> for LinalgError {
    fn from(err: CreationError) -> Self {
        match err {
            CreationError::OutOfBounds { row, col } => {
                LinalgError::MalformedSparse(format!("entry ({row}, {col}) is out of bounds"))
            }
            CreationError::Generic(e) => LinalgError::MalformedSparse(e.to_string()),
        }
    }
}

/// Result alias used throughout the crate.
pub type LinalgResult<T> = Result<T, LinalgError>;
