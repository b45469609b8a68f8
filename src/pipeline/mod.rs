//! Orchestrates: edge table -> graph -> pruning -> motifs + centrality.

pub mod analyze;

pub use analyze::{AnalysisPipeline, AnalysisReport, PruneSummary};
