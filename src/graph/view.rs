//! Name-ordered adjacency snapshot shared by the motif and centrality passes.

use std::collections::{HashMap, VecDeque};

use petgraph::stable_graph::NodeIndex;

use crate::graph::CoauthorGraph;

/// Dense, name-ordered snapshot of a graph's adjacency.
///
/// Position `i` is the `i`-th author by name, so comparing positions orders
/// authors by name. Neighbor lists are sorted.
#[derive(Debug)]
pub(crate) struct NodeView {
    pub nodes: Vec<NodeIndex>,
    pub neighbors: Vec<Vec<usize>>,
}

impl NodeView {
    pub fn new(graph: &CoauthorGraph) -> Self {
        let nodes = graph.sorted_node_indices();
        let position: HashMap<NodeIndex, usize> =
            nodes.iter().enumerate().map(|(i, &idx)| (idx, i)).collect();

        let inner = graph.inner();
        let neighbors = nodes
            .iter()
            .map(|&idx| {
                let mut adj: Vec<usize> = inner
                    .neighbors(idx)
                    .filter_map(|nbr| position.get(&nbr).copied())
                    .collect();
                adj.sort_unstable();
                adj.dedup();
                adj
            })
            .collect();

        Self { nodes, neighbors }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn name<'g>(&self, graph: &'g CoauthorGraph, i: usize) -> &'g str {
        graph.author_name(self.nodes[i]).unwrap_or_default()
    }

    /// Zip per-position values back to author names.
    pub fn into_named(self, graph: &CoauthorGraph, values: Vec<f64>) -> HashMap<String, f64> {
        self.nodes
            .into_iter()
            .zip(values)
            .filter_map(|(idx, v)| graph.author_name(idx).map(|n| (n.to_string(), v)))
            .collect()
    }

    /// Unweighted hop distances from `source`; `None` marks unreachable.
    pub fn bfs_distances(&self, source: usize) -> Vec<Option<usize>> {
        let mut dist = vec![None; self.len()];
        dist[source] = Some(0);
        let mut queue = VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            let next = dist[v].unwrap_or_default() + 1;
            for &w in &self.neighbors[v] {
                if dist[w].is_none() {
                    dist[w] = Some(next);
                    queue.push_back(w);
                }
            }
        }
        dist
    }
}
