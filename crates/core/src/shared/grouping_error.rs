use thiserror::Error;

/// Failures raised by the similarity, clustering and assembly stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupingError {
    /// Inconsistent embedding lengths, a malformed similarity matrix, or
    /// identifiers and labels of different lengths.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("distance threshold must be within [0, 2], got {0}")]
    InvalidThreshold(f64),
    #[error("embedding {index} contains a non-finite component")]
    NonFiniteEmbedding { index: usize },
}
