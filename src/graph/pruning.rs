//! Pruning logic: weight-threshold edge removal and degree-threshold node removal.

use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use tracing::debug;

use crate::graph::CoauthorGraph;

/// Destructive threshold filters over a graph.
///
/// Both filters collect the removal set from a read-only pass and only then
/// mutate the graph.
#[derive(Debug)]
pub struct GraphPruner;

impl GraphPruner {
    /// Remove every edge whose weight is strictly less than `min_weight`.
    ///
    /// Nodes are never removed here, even if their degree drops to zero.
    /// Returns the number of removed edges.
    pub fn filter_edges(graph: &mut CoauthorGraph, min_weight: f64) -> usize {
        // Phase 1: read-only scan
        let doomed: Vec<EdgeIndex> = {
            let inner = graph.inner();
            inner
                .edge_indices()
                .filter(|&eid| inner[eid].weight < min_weight)
                .collect()
        };

        // Phase 2: apply removals
        let removed = graph.remove_edges(&doomed);
        debug!(min_weight, removed, remaining = graph.edge_count(), "edge filter applied");
        removed
    }

    /// Remove every node whose current degree is strictly less than
    /// `min_degree`, along with its incident edges.
    ///
    /// Degrees are read once before any removal and the pass is not repeated
    /// until stable, so a neighbor of a removed node may be left with degree
    /// below `min_degree`. Returns the number of removed nodes.
    pub fn filter_nodes(graph: &mut CoauthorGraph, min_degree: u32) -> usize {
        let min_degree = min_degree as usize;
        let doomed: Vec<NodeIndex> = graph
            .inner()
            .node_indices()
            .filter(|&idx| graph.degree_of(idx) < min_degree)
            .collect();

        let removed = graph.remove_authors(&doomed);
        debug!(min_degree, removed, remaining = graph.node_count(), "node filter applied");
        removed
    }
}
