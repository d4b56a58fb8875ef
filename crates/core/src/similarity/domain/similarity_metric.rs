/// Domain interface for scoring how alike two embeddings are.
///
/// Implementations must be symmetric and return values in `[-1, 1]`,
/// never NaN, for any pair of equal-length finite vectors.
pub trait SimilarityMetric: Send + Sync {
    fn similarity(&self, a: &[f64], b: &[f64]) -> f64;
}
