//! Degree centrality: degree / (n - 1).

use std::collections::HashMap;

use crate::graph::CoauthorGraph;

/// Fraction of the other authors each author is adjacent to.
///
/// A graph with a single node scores it 1.0; an empty graph yields an empty
/// map.
pub fn degree_centrality(graph: &CoauthorGraph) -> HashMap<String, f64> {
    let inner = graph.inner();
    let n = inner.node_count();
    let scale = if n > 1 { 1.0 / (n - 1) as f64 } else { 1.0 };

    inner
        .node_indices()
        .map(|idx| {
            let score = if n == 1 {
                1.0
            } else {
                graph.degree_of(idx) as f64 * scale
            };
            (inner[idx].name.clone(), score)
        })
        .collect()
}
