use crate::similarity::domain::similarity_metric::SimilarityMetric;

/// Cosine similarity between raw (not pre-normalized) embeddings.
///
/// Each vector is scaled by its largest absolute component before any
/// products are taken, so finite inputs of any magnitude neither overflow
/// nor underflow. A zero vector scores 0 against everything, itself
/// included, instead of producing NaN.
#[derive(Debug, Default, Clone, Copy)]
pub struct CosineSimilarity;

impl CosineSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityMetric for CosineSimilarity {
    fn similarity(&self, a: &[f64], b: &[f64]) -> f64 {
        let scale_a = max_abs(a);
        let scale_b = max_abs(b);
        if scale_a == 0.0 || scale_b == 0.0 {
            return 0.0;
        }

        // Scaled squared norms lie in [1, D].
        let norm_sq_a = scaled_dot(a, scale_a, a, scale_a);
        let norm_sq_b = scaled_dot(b, scale_b, b, scale_b);

        // Equal norms divide by the squared norm directly so sim(v, v) is exactly 1.0.
        let denom = if norm_sq_a == norm_sq_b {
            norm_sq_a
        } else {
            norm_sq_a.sqrt() * norm_sq_b.sqrt()
        };
        (scaled_dot(a, scale_a, b, scale_b) / denom).clamp(-1.0, 1.0)
    }
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |acc: f64, x| acc.max(x.abs()))
}

fn scaled_dot(a: &[f64], scale_a: f64, b: &[f64], scale_b: f64) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x / scale_a) * (y / scale_b))
        .sum()
}
