//! Node centrality: degree, betweenness, closeness and eigenvector.
//!
//! All four metrics are unweighted; edge weights are ignored. Each call
//! recomputes scores from the current graph state.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::CographConfig;
use crate::errors::{CographError, Result};
use crate::graph::CoauthorGraph;

pub mod betweenness;
pub mod closeness;
pub mod degree;
pub mod eigenvector;

pub use eigenvector::PowerIteration;

/// The supported centrality metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentralityKind {
    /// Share of the other nodes a node is adjacent to.
    Degree,
    /// Share of shortest paths between other pairs passing through a node.
    Betweenness,
    /// Inverse mean distance to the reachable nodes.
    Closeness,
    /// Principal eigenvector of the adjacency matrix.
    Eigenvector,
}

impl CentralityKind {
    /// Every metric, in reporting order.
    pub const ALL: [CentralityKind; 4] = [
        CentralityKind::Degree,
        CentralityKind::Betweenness,
        CentralityKind::Closeness,
        CentralityKind::Eigenvector,
    ];

    /// Lowercase metric name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Betweenness => "betweenness",
            Self::Closeness => "closeness",
            Self::Eigenvector => "eigenvector",
        }
    }
}

impl fmt::Display for CentralityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CentralityKind {
    type Err = CographError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degree" => Ok(Self::Degree),
            "betweenness" => Ok(Self::Betweenness),
            "closeness" => Ok(Self::Closeness),
            "eigenvector" => Ok(Self::Eigenvector),
            _ => Err(CographError::UnknownMetric(s.to_string())),
        }
    }
}

/// Node → score mapping produced by one centrality pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CentralityScores {
    /// Metric that produced the scores; `None` for the empty fallback
    /// returned on an unrecognized metric name.
    pub kind: Option<CentralityKind>,
    /// Score per author name.
    pub scores: HashMap<String, f64>,
}

impl CentralityScores {
    pub(crate) fn new(kind: CentralityKind, scores: HashMap<String, f64>) -> Self {
        Self {
            kind: Some(kind),
            scores,
        }
    }

    /// Number of scored nodes.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no node was scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Get the score for a specific author.
    pub fn score(&self, name: &str) -> Option<f64> {
        self.scores.get(name).copied()
    }

    /// Authors sorted by score (descending), ties by name.
    pub fn sorted(&self) -> Vec<(String, f64)> {
        let mut pairs: Vec<_> = self.scores.iter().map(|(n, &s)| (n.clone(), s)).collect();
        pairs.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        pairs
    }

    /// Get the top N authors by score.
    pub fn top_n(&self, n: usize) -> Vec<(String, f64)> {
        self.sorted().into_iter().take(n).collect()
    }

    /// Authors whose score is at least `fraction` of the maximum score,
    /// sorted descending.
    pub fn at_least_fraction_of_max(&self, fraction: f64) -> Vec<(String, f64)> {
        let Some((_, max)) = self.max() else {
            return Vec::new();
        };
        let threshold = max * fraction;
        self.sorted()
            .into_iter()
            .filter(|(_, s)| *s >= threshold)
            .collect()
    }

    /// Get the author with the highest score.
    pub fn max(&self) -> Option<(String, f64)> {
        self.sorted().into_iter().next()
    }

    /// Get the author with the lowest score.
    pub fn min(&self) -> Option<(String, f64)> {
        self.sorted().into_iter().last()
    }

    /// Get the mean score.
    pub fn mean(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.values().sum::<f64>() / self.scores.len() as f64
    }
}

/// Compute one centrality metric over the whole graph.
///
/// Only the eigenvector metric can fail, with
/// [`CographError::Convergence`] when power iteration does not settle
/// within `config.eigenvector_max_iterations`.
pub fn analyze_centrality(
    graph: &CoauthorGraph,
    kind: CentralityKind,
    config: &CographConfig,
) -> Result<CentralityScores> {
    let scores = match kind {
        CentralityKind::Degree => degree::degree_centrality(graph),
        CentralityKind::Betweenness => betweenness::betweenness_centrality(graph),
        CentralityKind::Closeness => closeness::closeness_centrality(graph),
        CentralityKind::Eigenvector => {
            let solver = PowerIteration::new(
                config.eigenvector_max_iterations,
                config.eigenvector_tolerance,
            );
            eigenvector::eigenvector_centrality(graph, &solver)?
        }
    };
    Ok(CentralityScores::new(kind, scores))
}

/// Compute a centrality metric named by a string.
///
/// An unrecognized name yields an empty mapping (logged as a warning), or
/// [`CographError::UnknownMetric`] when `config.strict_metrics` is set.
pub fn analyze_centrality_named(
    graph: &CoauthorGraph,
    name: &str,
    config: &CographConfig,
) -> Result<CentralityScores> {
    match name.parse::<CentralityKind>() {
        Ok(kind) => analyze_centrality(graph, kind, config),
        Err(err) if config.strict_metrics => Err(err),
        Err(_) => {
            warn!(metric = name, "unknown centrality metric; returning empty scores");
            Ok(CentralityScores::default())
        }
    }
}
