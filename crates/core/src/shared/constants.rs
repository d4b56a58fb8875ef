/// Maximum average distance at which two clusters are still merged.
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 0.5;

/// Achievable range of `1 - cosine_similarity`.
pub const MIN_DISTANCE_THRESHOLD: f64 = 0.0;
pub const MAX_DISTANCE_THRESHOLD: f64 = 2.0;

/// Allowed asymmetry between `sim[i][j]` and `sim[j][i]`.
pub const SYMMETRY_TOLERANCE: f64 = 1e-6;
