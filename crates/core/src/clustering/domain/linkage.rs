use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the distance between two clusters is derived from the pairwise
/// distances of their members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    /// Arithmetic mean over all member pairs.
    #[default]
    Average,
    /// Closest member pair.
    Single,
    /// Farthest member pair.
    Complete,
}

impl Linkage {
    pub const ALL: &[Linkage] = &[Linkage::Average, Linkage::Single, Linkage::Complete];

    /// Reduces the member-pair distances of two clusters to one value.
    ///
    /// Returns `None` when `distances` is empty.
    pub fn aggregate(self, distances: impl IntoIterator<Item = f64>) -> Option<f64> {
        let mut count = 0usize;
        let mut acc = match self {
            Linkage::Average => 0.0,
            Linkage::Single => f64::INFINITY,
            Linkage::Complete => f64::NEG_INFINITY,
        };
        for d in distances {
            count += 1;
            acc = match self {
                Linkage::Average => acc + d,
                Linkage::Single => acc.min(d),
                Linkage::Complete => acc.max(d),
            };
        }
        match (self, count) {
            (_, 0) => None,
            (Linkage::Average, n) => Some(acc / n as f64),
            _ => Some(acc),
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Linkage::Average => write!(f, "average"),
            Linkage::Single => write!(f, "single"),
            Linkage::Complete => write!(f, "complete"),
        }
    }
}

impl FromStr for Linkage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "average" => Ok(Linkage::Average),
            "single" => Ok(Linkage::Single),
            "complete" => Ok(Linkage::Complete),
            other => Err(format!(
                "Linkage must be one of: average, single, complete, got '{other}'"
            )),
        }
    }
}
