use ndarray::Array2;

use crate::shared::grouping_error::GroupingError;
use crate::similarity::domain::similarity_metric::SimilarityMetric;

/// Builds the N×N pairwise similarity matrix for a batch of embeddings.
///
/// Only the upper triangle is scored; the lower triangle is mirrored from
/// it so the result is exactly symmetric.
pub struct SimilarityEngine {
    metric: Box<dyn SimilarityMetric>,
}

impl SimilarityEngine {
    pub fn new(metric: Box<dyn SimilarityMetric>) -> Self {
        Self { metric }
    }

    pub fn compute(&self, embeddings: &[&[f64]]) -> Result<Array2<f64>, GroupingError> {
        validate_embeddings(embeddings)?;

        let n = embeddings.len();
        let mut matrix = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for j in i..n {
                let score = self.metric.similarity(embeddings[i], embeddings[j]);
                matrix[[i, j]] = score;
                matrix[[j, i]] = score;
            }
        }
        log::debug!("Scored {} embedding pairs", n * (n + 1) / 2);
        Ok(matrix)
    }
}

/// Checks every embedding against the dimensionality of the first one.
fn validate_embeddings(embeddings: &[&[f64]]) -> Result<(), GroupingError> {
    let Some(first) = embeddings.first() else {
        return Ok(());
    };
    let expected = first.len();
    if expected == 0 {
        return Err(GroupingError::DimensionMismatch(
            "embeddings must have at least one component".to_string(),
        ));
    }

    for (index, embedding) in embeddings.iter().enumerate() {
        if embedding.len() != expected {
            return Err(GroupingError::DimensionMismatch(format!(
                "embedding {index} has {} components, expected {expected}",
                embedding.len()
            )));
        }
        if embedding.iter().any(|x| !x.is_finite()) {
            return Err(GroupingError::NonFiniteEmbedding { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scores identical vectors 1.0 and everything else 0.25.
    struct StubMetric;

    impl SimilarityMetric for StubMetric {
        fn similarity(&self, a: &[f64], b: &[f64]) -> f64 {
            if a == b {
                1.0
            } else {
                0.25
            }
        }
    }

    fn engine() -> SimilarityEngine {
        SimilarityEngine::new(Box::new(StubMetric))
    }

    #[test]
    fn test_empty_input_yields_empty_matrix() {
        let matrix = engine().compute(&[]).unwrap();
        assert_eq!(matrix.shape(), &[0, 0]);
    }

    #[test]
    fn test_matrix_is_square_and_symmetric() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        let c = [1.0, 1.0];
        let matrix = engine().compute(&[&a, &b, &c]).unwrap();
        assert_eq!(matrix.shape(), &[3, 3]);
        for i in 0..3 {
            assert_eq!(matrix[[i, i]], 1.0);
            for j in 0..3 {
                assert_eq!(matrix[[i, j]], matrix[[j, i]]);
            }
        }
        assert_eq!(matrix[[0, 2]], 0.25);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let a = [1.0, 0.0];
        let b = [1.0, 0.0, 0.0];
        let err = engine().compute(&[&a, &b]).unwrap_err();
        match err {
            GroupingError::DimensionMismatch(msg) => {
                assert!(msg.contains("embedding 1"));
                assert!(msg.contains("expected 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_length_embeddings_are_rejected() {
        let a: [f64; 0] = [];
        let err = engine().compute(&[&a]).unwrap_err();
        assert!(matches!(err, GroupingError::DimensionMismatch(_)));
    }

    #[test]
    fn test_nan_component_is_rejected() {
        let a = [1.0, 0.0];
        let b = [f64::NAN, 0.0];
        let err = engine().compute(&[&a, &b]).unwrap_err();
        assert_eq!(err, GroupingError::NonFiniteEmbedding { index: 1 });
    }
}
