//! Global configuration for graph pruning and analysis.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CographError, Result};
use crate::types::{MergePolicy, TriadStrategy};

/// Configuration for ingestion, pruning, and the analytics passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CographConfig {
    /// Edges with a weight strictly below this are removed.
    pub min_edge_weight: f64,
    /// Nodes with a degree strictly below this are removed.
    pub min_degree: u32,
    /// Triads whose summed weight is below this are not reported.
    pub min_triad_weight: f64,
    /// Duplicate-pair handling during graph construction.
    pub merge_policy: MergePolicy,
    /// Separator used in composite journal labels.
    pub journal_separator: String,
    /// Candidate generation for triad enumeration.
    pub triad_strategy: TriadStrategy,
    /// Iteration budget for eigenvector power iteration.
    pub eigenvector_max_iterations: usize,
    /// Convergence tolerance for eigenvector power iteration.
    pub eigenvector_tolerance: f64,
    /// Reject unknown centrality names instead of returning an empty mapping.
    pub strict_metrics: bool,
}

impl Default for CographConfig {
    fn default() -> Self {
        Self {
            min_edge_weight: 0.0,
            min_degree: 0,
            min_triad_weight: 0.0,
            merge_policy: MergePolicy::LastWriteWins,
            journal_separator: "/".to_string(),
            triad_strategy: TriadStrategy::Exhaustive,
            eigenvector_max_iterations: 100,
            eigenvector_tolerance: 1e-6,
            strict_metrics: false,
        }
    }
}

impl CographConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check thresholds and solver parameters for sane values.
    pub fn validate(&self) -> Result<()> {
        if !self.min_edge_weight.is_finite() || self.min_edge_weight < 0.0 {
            return Err(CographError::Config(format!(
                "min_edge_weight must be a non-negative number, got {}",
                self.min_edge_weight
            )));
        }
        if !self.min_triad_weight.is_finite() || self.min_triad_weight < 0.0 {
            return Err(CographError::Config(format!(
                "min_triad_weight must be a non-negative number, got {}",
                self.min_triad_weight
            )));
        }
        if self.journal_separator.is_empty() {
            return Err(CographError::Config("journal_separator must not be empty".into()));
        }
        if self.eigenvector_max_iterations == 0 {
            return Err(CographError::Config(
                "eigenvector_max_iterations must be at least 1".into(),
            ));
        }
        if self.eigenvector_tolerance.is_nan() || self.eigenvector_tolerance <= 0.0 {
            return Err(CographError::Config(format!(
                "eigenvector_tolerance must be positive, got {}",
                self.eigenvector_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(CographConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: CographConfig =
            serde_json::from_str(r#"{"min_degree": 3, "merge_policy": "sum"}"#).unwrap();
        assert_eq!(config.min_degree, 3);
        assert_eq!(config.merge_policy, MergePolicy::Sum);
        assert_eq!(config.journal_separator, "/");
        assert_eq!(config.eigenvector_max_iterations, 100);
    }

    #[test]
    fn rejects_negative_thresholds_and_bad_tolerance() {
        let config = CographConfig { min_edge_weight: -1.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(CographError::Config(_))));

        let config = CographConfig { eigenvector_tolerance: 0.0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = CographConfig { journal_separator: String::new(), ..Default::default() };
        assert!(config.validate().is_err());
    }
}
