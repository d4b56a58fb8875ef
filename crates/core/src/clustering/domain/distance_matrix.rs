use ndarray::Array2;

use crate::shared::constants::SYMMETRY_TOLERANCE;
use crate::shared::grouping_error::GroupingError;

/// Pairwise `1 - similarity` distances, validated square and symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    values: Array2<f64>,
}

impl DistanceMatrix {
    pub fn from_similarity(similarity: &Array2<f64>) -> Result<Self, GroupingError> {
        let (rows, cols) = similarity.dim();
        if rows != cols {
            return Err(GroupingError::DimensionMismatch(format!(
                "similarity matrix is {rows}x{cols}, expected square"
            )));
        }

        for i in 0..rows {
            for j in (i + 1)..cols {
                let (a, b) = (similarity[[i, j]], similarity[[j, i]]);
                if !a.is_finite() || !b.is_finite() || (a - b).abs() > SYMMETRY_TOLERANCE {
                    return Err(GroupingError::DimensionMismatch(format!(
                        "similarity matrix is not symmetric at ({i}, {j}): {a} vs {b}"
                    )));
                }
            }
        }

        Ok(Self {
            values: similarity.mapv(|s| 1.0 - s),
        })
    }

    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.values
    }
}
