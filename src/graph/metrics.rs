//! Graph-level metrics (degree, density, clustering, etc.).

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::graph::CoauthorGraph;

/// Summary metrics for health-checking the graph.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMetrics {
    /// Total number of nodes.
    pub num_nodes: usize,
    /// Total number of edges.
    pub num_edges: usize,
    /// Average degree of the graph.
    pub avg_degree: f64,
    /// Edges present over edges possible.
    pub density: f64,
    /// Nodes with no incident edges.
    pub isolated_nodes: usize,
    /// Sum of all edge weights.
    pub total_weight: f64,
    /// Mean local clustering coefficient; nodes of degree < 2 count as 0.
    pub avg_clustering: f64,
}

impl GraphMetrics {
    /// Compute metrics for the given graph.
    pub fn compute(graph: &CoauthorGraph) -> Self {
        let inner = graph.inner();
        let num_nodes = inner.node_count();
        let num_edges = inner.edge_count();

        let avg_degree = if num_nodes > 0 {
            (2 * num_edges) as f64 / num_nodes as f64
        } else {
            0.0
        };

        let density = if num_nodes > 1 {
            (2 * num_edges) as f64 / (num_nodes * (num_nodes - 1)) as f64
        } else {
            0.0
        };

        let isolated_nodes = inner
            .node_indices()
            .filter(|&idx| graph.degree_of(idx) == 0)
            .count();

        Self {
            num_nodes,
            num_edges,
            avg_degree,
            density,
            isolated_nodes,
            total_weight: graph.total_weight(),
            avg_clustering: average_clustering(graph),
        }
    }
}

fn average_clustering(graph: &CoauthorGraph) -> f64 {
    let inner = graph.inner();
    let n = inner.node_count();
    if n == 0 {
        return 0.0;
    }

    let total: f64 = inner
        .node_indices()
        .map(|idx| local_clustering(graph, idx))
        .sum();
    total / n as f64
}

fn local_clustering(graph: &CoauthorGraph, idx: NodeIndex) -> f64 {
    let inner = graph.inner();
    let nbrs: Vec<NodeIndex> = inner.neighbors(idx).collect();
    let k = nbrs.len();
    if k < 2 {
        return 0.0;
    }

    let nbr_set: HashSet<NodeIndex> = nbrs.iter().copied().collect();
    // Each closed pair is seen from both ends.
    let links: usize = nbrs
        .iter()
        .map(|&u| inner.neighbors(u).filter(|w| nbr_set.contains(w)).count())
        .sum();

    links as f64 / (k * (k - 1)) as f64
}
