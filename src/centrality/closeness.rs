//! Closeness centrality over unweighted shortest paths.
//!
//! Uses the Wasserman–Faust form so that disconnected graphs are handled:
//! with `r` nodes reachable from v (v included) and distance sum `S`,
//!
//! CC(v) = ((r - 1) / S) · ((r - 1) / (n - 1))
//!
//! Unreachable pairs are excluded from `S`; a node that reaches nothing
//! scores 0. On a connected graph this is the plain (n - 1) / S.

use std::collections::HashMap;

use crate::graph::view::NodeView;
use crate::graph::CoauthorGraph;

/// Closeness centrality for every author.
pub fn closeness_centrality(graph: &CoauthorGraph) -> HashMap<String, f64> {
    let view = NodeView::new(graph);
    let n = view.len();

    let scores: Vec<f64> = (0..n)
        .map(|v| {
            let dist = view.bfs_distances(v);
            let reachable = dist.iter().flatten().count();
            let total: usize = dist.iter().flatten().sum();
            if total == 0 || n <= 1 {
                return 0.0;
            }
            let others = (reachable - 1) as f64;
            (others / total as f64) * (others / (n - 1) as f64)
        })
        .collect();

    view.into_named(graph, scores)
}
