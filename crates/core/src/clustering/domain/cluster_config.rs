use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clustering::domain::linkage::Linkage;
use crate::shared::constants::{
    DEFAULT_DISTANCE_THRESHOLD, MAX_DISTANCE_THRESHOLD, MIN_DISTANCE_THRESHOLD,
};
use crate::shared::grouping_error::GroupingError;

/// Tunables of the agglomerative clusterer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Merges stop once the closest pair of clusters is farther apart than this.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub linkage: Linkage,
}

fn default_threshold() -> f64 {
    DEFAULT_DISTANCE_THRESHOLD
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DISTANCE_THRESHOLD,
            linkage: Linkage::default(),
        }
    }
}

impl ClusterConfig {
    pub fn new(threshold: f64, linkage: Linkage) -> Self {
        Self { threshold, linkage }
    }

    pub fn with_threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    pub fn with_linkage(self, linkage: Linkage) -> Self {
        Self { linkage, ..self }
    }

    pub fn validate(&self) -> Result<(), GroupingError> {
        if !(MIN_DISTANCE_THRESHOLD..=MAX_DISTANCE_THRESHOLD).contains(&self.threshold) {
            return Err(GroupingError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Loads a config from a JSON file; missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: ClusterConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_values() {
        let config = ClusterConfig::default();
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.linkage, Linkage::Average);
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::one(1.0)]
    #[case::two(2.0)]
    fn test_threshold_within_range_is_valid(#[case] threshold: f64) {
        assert!(ClusterConfig::default()
            .with_threshold(threshold)
            .validate()
            .is_ok());
    }

    #[rstest]
    #[case::negative(-0.01)]
    #[case::above_two(2.01)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn test_threshold_outside_range_is_rejected(#[case] threshold: f64) {
        let err = ClusterConfig::default()
            .with_threshold(threshold)
            .validate()
            .unwrap_err();
        assert!(matches!(err, GroupingError::InvalidThreshold(_)));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: ClusterConfig = serde_json::from_str(r#"{"linkage": "complete"}"#).unwrap();
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.linkage, Linkage::Complete);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cluster.json");
        let config = ClusterConfig::new(0.35, Linkage::Single);
        config.save(&path).unwrap();
        assert_eq!(ClusterConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ClusterConfig::load(&dir.path().join("absent.json")).is_err());
    }
}
