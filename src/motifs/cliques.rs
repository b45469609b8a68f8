//! Maximal and maximum cliques via Bron–Kerbosch with pivoting.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::CoauthorGraph;
use crate::graph::view::NodeView;

/// A set of authors in which every pair is connected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clique {
    /// Author names in lexicographic order.
    pub members: Vec<String>,
}

impl Clique {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the clique has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `name` is a member.
    pub fn contains(&self, name: &str) -> bool {
        self.members.binary_search_by(|m| m.as_str().cmp(name)).is_ok()
    }
}

/// All maximal cliques, each with sorted members, in enumeration order.
///
/// Isolated authors form singleton cliques.
pub fn maximal_cliques(graph: &CoauthorGraph) -> Vec<Clique> {
    let view = NodeView::new(graph);
    let mut found = Vec::new();
    enumerate(&view, &mut |members| found.push(to_clique(graph, &view, members)));
    found
}

/// The largest maximal clique.
///
/// Among several cliques of the maximum size, the one whose sorted member
/// list is lexicographically smallest wins, so the result does not depend
/// on enumeration order. An empty or edgeless graph yields an empty clique.
pub fn find_max_clique(graph: &CoauthorGraph) -> Clique {
    if graph.edge_count() == 0 {
        return Clique::default();
    }

    let view = NodeView::new(graph);
    let mut best: Vec<usize> = Vec::new();
    let mut maximal = 0usize;
    enumerate(&view, &mut |members| {
        maximal += 1;
        let better = members.len() > best.len()
            || (members.len() == best.len() && members < best.as_slice());
        if better {
            best = members.to_vec();
        }
    });

    debug!(maximal, size = best.len(), "maximum clique selected");
    to_clique(graph, &view, &best)
}

fn to_clique(graph: &CoauthorGraph, view: &NodeView, members: &[usize]) -> Clique {
    // Positions are name-ordered, so sorted positions give sorted names.
    Clique {
        members: members.iter().map(|&i| view.name(graph, i).to_string()).collect(),
    }
}

/// Drive Bron–Kerbosch over the whole view, reporting each maximal clique
/// as sorted local positions.
fn enumerate(view: &NodeView, visit: &mut dyn FnMut(&[usize])) {
    let adjacency: Vec<BTreeSet<usize>> = view
        .neighbors
        .iter()
        .map(|nbrs| nbrs.iter().copied().collect())
        .collect();

    let candidates: BTreeSet<usize> = (0..view.len()).collect();
    let mut clique = Vec::new();
    bron_kerbosch(&adjacency, &mut clique, candidates, BTreeSet::new(), visit);
}

fn bron_kerbosch(
    adj: &[BTreeSet<usize>],
    r: &mut Vec<usize>,
    mut p: BTreeSet<usize>,
    mut x: BTreeSet<usize>,
    visit: &mut dyn FnMut(&[usize]),
) {
    if p.is_empty() {
        if x.is_empty() && !r.is_empty() {
            let mut members = r.clone();
            members.sort_unstable();
            visit(&members);
        }
        return;
    }

    // Pivot on the vertex covering most of P.
    let pivot = p
        .iter()
        .chain(x.iter())
        .copied()
        .max_by_key(|&u| p.intersection(&adj[u]).count())
        .unwrap_or_default();

    let vertices: Vec<usize> = p.difference(&adj[pivot]).copied().collect();
    for v in vertices {
        let new_p: BTreeSet<usize> = p.intersection(&adj[v]).copied().collect();
        let new_x: BTreeSet<usize> = x.intersection(&adj[v]).copied().collect();

        r.push(v);
        bron_kerbosch(adj, r, new_p, new_x, visit);
        r.pop();

        p.remove(&v);
        x.insert(v);
    }
}
