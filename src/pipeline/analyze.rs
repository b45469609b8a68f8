//! End-to-end analysis run over an edge table.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    centrality::{analyze_centrality, CentralityKind, CentralityScores},
    config::CographConfig,
    errors::Result,
    graph::{CoauthorGraph, GraphBuilder, GraphMetrics, GraphPruner},
    ingest::EdgeTable,
    motifs::{find_max_clique, find_triads, Clique, TriadScan},
};

/// How much the threshold filters removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PruneSummary {
    /// Edges removed by the weight filter.
    pub edges_removed: usize,
    /// Nodes removed by the degree filter.
    pub nodes_removed: usize,
}

/// Everything one analysis run derives from the pruned graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Metrics of the graph as built.
    pub before: GraphMetrics,
    /// Metrics after edge and node filtering.
    pub after: GraphMetrics,
    /// Removal counts of the two filters.
    pub pruning: PruneSummary,
    /// Triads meeting the configured weight, heaviest first.
    pub triads: TriadScan,
    /// Largest clique of the pruned graph.
    pub max_clique: Clique,
    /// Authors whose edges span more than one journal label.
    pub bridging_authors: Vec<String>,
    /// One score mapping per requested metric.
    pub centrality: Vec<CentralityScores>,
}

/// High-level pipeline: edge table -> pruned graph -> report.
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    config: CographConfig,
    kinds: Vec<CentralityKind>,
}

impl AnalysisPipeline {
    /// Create a pipeline computing every centrality metric.
    pub fn new(config: CographConfig) -> Self {
        Self {
            config,
            kinds: CentralityKind::ALL.to_vec(),
        }
    }

    /// Restrict the centrality metrics that are computed.
    pub fn with_kinds(mut self, kinds: Vec<CentralityKind>) -> Self {
        self.kinds = kinds;
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &CographConfig {
        &self.config
    }

    /// Build the graph from a table using the configured merge policy.
    pub fn build_graph(&self, table: &EdgeTable) -> CoauthorGraph {
        GraphBuilder::new(&self.config).build(table)
    }

    /// Apply the edge filter, then the node filter.
    pub fn prune(&self, graph: &mut CoauthorGraph) -> PruneSummary {
        let edges_removed = GraphPruner::filter_edges(graph, self.config.min_edge_weight);
        let nodes_removed = GraphPruner::filter_nodes(graph, self.config.min_degree);
        PruneSummary {
            edges_removed,
            nodes_removed,
        }
    }

    /// Build, prune and analyze. Returns the pruned graph with the report.
    pub fn run(&self, table: &EdgeTable) -> Result<(CoauthorGraph, AnalysisReport)> {
        let mut graph = self.build_graph(table);
        let report = self.run_on_graph(&mut graph)?;
        Ok((graph, report))
    }

    /// Prune an existing graph in place and analyze what remains.
    ///
    /// Fails with a config error before touching the graph if the
    /// thresholds or solver parameters are invalid.
    pub fn run_on_graph(&self, graph: &mut CoauthorGraph) -> Result<AnalysisReport> {
        self.config.validate()?;
        let before = GraphMetrics::compute(graph);
        let pruning = self.prune(graph);
        let after = GraphMetrics::compute(graph);
        info!(
            nodes = after.num_nodes,
            edges = after.num_edges,
            edges_removed = pruning.edges_removed,
            nodes_removed = pruning.nodes_removed,
            "graph pruned"
        );

        let mut triads = find_triads(graph, self.config.min_triad_weight, self.config.triad_strategy);
        triads.sort_by_weight();

        let max_clique = find_max_clique(graph);

        let centrality = self
            .kinds
            .iter()
            .map(|&kind| analyze_centrality(graph, kind, &self.config))
            .collect::<Result<Vec<_>>>()?;

        Ok(AnalysisReport {
            before,
            after,
            pruning,
            triads,
            max_clique,
            bridging_authors: graph.bridging_authors(),
            centrality,
        })
    }
}
