//! A* heuristic selection.

use std::fmt;
use std::str::FromStr;

use pf_core::{PfError, Point, Real, euclidean, manhattan};

/// Distance estimate used by A* to order its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Sum of axis distances.
    Manhattan,
}

impl Heuristic {
    /// Every supported heuristic, in comparison order.
    pub const ALL: [Heuristic; 2] = [Heuristic::Euclidean, Heuristic::Manhattan];

    /// Estimate the remaining cost from `from` to `goal`.
    #[inline]
    pub fn estimate(self, from: Point, goal: Point) -> Real {
        match self {
            Heuristic::Euclidean => euclidean(from, goal),
            Heuristic::Manhattan => manhattan(from, goal),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Euclidean => "euclidean",
            Heuristic::Manhattan => "manhattan",
        }
    }

    /// Parse a heuristic name, falling back to Euclidean when unrecognized.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(heuristic = s, "unrecognized heuristic, using euclidean");
            Heuristic::default()
        })
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = PfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Heuristic::Euclidean),
            "manhattan" => Ok(Heuristic::Manhattan),
            _ => Err(PfError::InvalidArg {
                what: format!("unknown heuristic '{s}' (expected euclidean or manhattan)"),
            }),
        }
    }
}
