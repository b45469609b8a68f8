//! Common core types used across the engine.

use std::fmt;
use std::str::FromStr;

use lasso::{Key, Spur};
use serde::{Deserialize, Serialize};

/// Interned identifier for an author (graph node).
///
/// Ids are only meaningful within the graph whose registry issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorId(pub Spur);

impl AuthorId {
    /// Dense position of the name in interning order.
    pub fn index(self) -> usize {
        self.0.into_usize()
    }
}

/// What happens when a second row names an already-present author pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// The later row replaces both `Weight` and `Journal`.
    #[default]
    LastWriteWins,
    /// Weights are added; journal labels are unioned.
    Sum,
}

impl FromStr for MergePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last" | "last_write_wins" | "last-write-wins" => Ok(Self::LastWriteWins),
            "sum" => Ok(Self::Sum),
            other => Err(format!("unknown merge policy '{other}' (expected 'last' or 'sum')")),
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastWriteWins => f.write_str("last_write_wins"),
            Self::Sum => f.write_str("sum"),
        }
    }
}

/// How candidate triples are generated during triad enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriadStrategy {
    /// Visit every one of the C(n,3) node triples.
    #[default]
    Exhaustive,
    /// Only extend pairs that are already adjacent. Same result set.
    NeighborIntersection,
}

impl FromStr for TriadStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(Self::Exhaustive),
            "neighbor" | "neighbor_intersection" | "neighbor-intersection" => {
                Ok(Self::NeighborIntersection)
            }
            other => Err(format!("unknown triad strategy '{other}'")),
        }
    }
}
