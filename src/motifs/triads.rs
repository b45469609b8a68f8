//! Triad enumeration: complete triangles and their aggregate weight.
//!
//! The exhaustive strategy visits all C(n,3) node triples and checks each
//! one for the three pairwise edges; its cost is cubic in the node count,
//! so it is only practical on a graph already pruned by weight and degree.
//! The neighbor-intersection strategy only extends adjacent pairs and yields
//! the same set of triads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::graph::CoauthorGraph;
use crate::graph::view::NodeView;
use crate::types::TriadStrategy;

/// Candidate count above which an exhaustive scan gets a warning.
const LARGE_SCAN_WARNING: u128 = 1_000_000_000;

/// Three mutually connected authors and the sum of their three edge weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triad {
    /// Author names in lexicographic order.
    pub members: [String; 3],
    /// Sum of the three edge weights.
    pub weight: f64,
}

impl Triad {
    /// Whether `name` is one of the three members.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }
}

/// Outcome of one triad enumeration pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriadScan {
    /// Triads meeting the weight threshold, in discovery order.
    pub triads: Vec<Triad>,
    /// Number of candidate triples checked for closure.
    pub examined: u64,
    /// Candidate generation used.
    pub strategy: TriadStrategy,
}

impl TriadScan {
    /// Number of reported triads.
    pub fn len(&self) -> usize {
        self.triads.len()
    }

    /// Whether no triad met the threshold.
    pub fn is_empty(&self) -> bool {
        self.triads.is_empty()
    }

    /// Order triads by weight descending, then by member names.
    pub fn sort_by_weight(&mut self) {
        self.triads.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.members.cmp(&b.members))
        });
    }

    /// The `n` heaviest triads.
    pub fn top_n(&self, n: usize) -> Vec<Triad> {
        let mut sorted = self.clone();
        sorted.sort_by_weight();
        sorted.triads.truncate(n);
        sorted.triads
    }
}

/// C(n,3): the number of triples an exhaustive scan visits.
pub fn candidate_triples(n: usize) -> u64 {
    if n < 3 {
        return 0;
    }
    let n = n as u128;
    let c = n * (n - 1) * (n - 2) / 6;
    u64::try_from(c).unwrap_or(u64::MAX)
}

/// Enumerate every triangle whose summed edge weight is at least
/// `min_weight`.
///
/// Works on an empty or edgeless graph and then reports nothing.
pub fn find_triads(graph: &CoauthorGraph, min_weight: f64, strategy: TriadStrategy) -> TriadScan {
    let view = NodeView::new(graph);
    let weights = pair_weights(graph, &view);

    let (triples, examined) = match strategy {
        TriadStrategy::Exhaustive => exhaustive(&view, &weights, min_weight),
        TriadStrategy::NeighborIntersection => neighbor_intersection(&view, &weights, min_weight),
    };

    let triads: Vec<Triad> = triples
        .into_iter()
        .map(|(i, j, k, weight)| Triad {
            members: [
                view.name(graph, i).to_string(),
                view.name(graph, j).to_string(),
                view.name(graph, k).to_string(),
            ],
            weight,
        })
        .collect();

    info!(
        nodes = view.len(),
        examined,
        found = triads.len(),
        min_weight,
        ?strategy,
        "triad enumeration finished"
    );

    TriadScan {
        triads,
        examined,
        strategy,
    }
}

type PairWeights = HashMap<(usize, usize), f64>;
type Hit = (usize, usize, usize, f64);

/// Edge weights keyed by `(low, high)` local positions.
fn pair_weights(graph: &CoauthorGraph, view: &NodeView) -> PairWeights {
    let inner = graph.inner();
    let mut weights = HashMap::with_capacity(inner.edge_count());
    for (i, &a) in view.nodes.iter().enumerate() {
        for &j in &view.neighbors[i] {
            if j <= i {
                continue;
            }
            if let Some(eid) = inner.find_edge(a, view.nodes[j]) {
                weights.insert((i, j), inner[eid].weight);
            }
        }
    }
    weights
}

fn exhaustive(view: &NodeView, weights: &PairWeights, min_weight: f64) -> (Vec<Hit>, u64) {
    let n = view.len();
    let expected = candidate_triples(n) as u128;
    if expected > LARGE_SCAN_WARNING {
        warn!(
            nodes = n,
            candidates = expected as u64,
            "exhaustive triad scan over a large graph; prune edges and nodes first"
        );
    }

    let mut hits = Vec::new();
    let mut examined = 0u64;
    for i in 0..n {
        for j in (i + 1)..n {
            let w_ij = weights.get(&(i, j)).copied();
            for k in (j + 1)..n {
                examined += 1;
                let (Some(a), Some(b), Some(c)) =
                    (w_ij, weights.get(&(i, k)), weights.get(&(j, k)))
                else {
                    continue;
                };
                let total = a + b + c;
                if total >= min_weight {
                    hits.push((i, j, k, total));
                }
            }
        }
    }
    (hits, examined)
}

fn neighbor_intersection(
    view: &NodeView,
    weights: &PairWeights,
    min_weight: f64,
) -> (Vec<Hit>, u64) {
    let mut hits = Vec::new();
    let mut examined = 0u64;
    for i in 0..view.len() {
        let higher_i: Vec<usize> = view.neighbors[i].iter().copied().filter(|&j| j > i).collect();
        for &j in &higher_i {
            for &k in view.neighbors[j].iter().filter(|&&k| k > j) {
                examined += 1;
                if higher_i.binary_search(&k).is_err() {
                    continue;
                }
                let (Some(a), Some(b), Some(c)) =
                    (weights.get(&(i, j)), weights.get(&(i, k)), weights.get(&(j, k)))
                else {
                    continue;
                };
                let total = a + b + c;
                if total >= min_weight {
                    hits.push((i, j, k, total));
                }
            }
        }
    }
    (hits, examined)
}
