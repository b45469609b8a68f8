//! Betweenness centrality using Brandes' algorithm.
//!
//! BC(v) = Σ σ_st(v) / σ_st over unordered pairs {s, t} with s ≠ v ≠ t,
//! where σ_st counts shortest s–t paths and σ_st(v) those through v.
//! Paths are unweighted (hop count). Scores are normalized by the number
//! of pairs not involving v, (n-1)(n-2)/2, so they fall in [0, 1].

use std::collections::{HashMap, VecDeque};

use crate::graph::view::NodeView;
use crate::graph::CoauthorGraph;

/// Normalized, unweighted betweenness centrality for every author.
///
/// Graphs with two or fewer nodes score everyone 0.
pub fn betweenness_centrality(graph: &CoauthorGraph) -> HashMap<String, f64> {
    let view = NodeView::new(graph);
    let n = view.len();
    let mut centrality = vec![0.0f64; n];

    // Brandes: every node as source
    for s in 0..n {
        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0f64; n];
        sigma[s] = 1.0;
        let mut dist: Vec<i64> = vec![-1; n];
        dist[s] = 0;

        let mut queue = VecDeque::from([s]);
        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for &w in &view.neighbors[v] {
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        // Accumulation
        let mut delta = vec![0.0f64; n];
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
            if w != s {
                centrality[w] += delta[w];
            }
        }
    }

    // Each unordered pair was counted from both ends.
    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for score in &mut centrality {
            *score *= scale;
        }
    } else {
        centrality.fill(0.0);
    }

    view.into_named(graph, centrality)
}
