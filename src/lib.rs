#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, rust_2018_idioms)]
#![warn(missing_docs)]

//! # cograph-core
//!
//! Analytics engine for weighted co-authorship graphs, where authors are
//! linked by shared journal appearances:
//! - ingestion of `Source,Target,Weight,Journal` edge tables
//! - threshold pruning of edges (by weight) and nodes (by degree)
//! - exhaustive triad enumeration and maximum-clique search
//! - degree, betweenness, closeness and eigenvector centrality
//!
//! The graph is built once, pruned in place, and every derived result is
//! recomputed from the current graph state.

pub mod centrality;
pub mod config;
pub mod errors;
pub mod graph;
/// Tabular edge-source ingestion.
pub mod ingest;
/// Triad and clique discovery.
pub mod motifs;
/// Persistence of reports and pruned edge lists.
pub mod persistence;
/// High-level pipelines.
pub mod pipeline;
pub mod types;

pub use centrality::{analyze_centrality, analyze_centrality_named, CentralityKind, CentralityScores};
pub use config::CographConfig;
pub use errors::{CographError, Result};
pub use graph::{CoauthorGraph, GraphBuilder, GraphMetrics, GraphPruner};
pub use ingest::{EdgeRecord, EdgeTable};
pub use motifs::{find_max_clique, find_triads, Clique, Triad, TriadScan};
pub use pipeline::{AnalysisPipeline, AnalysisReport};
pub use types::{AuthorId, MergePolicy, TriadStrategy};
