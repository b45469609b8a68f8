//! Co-authorship graph: nodes, edges, construction, pruning, and metrics.

use std::collections::{BTreeSet, HashSet};

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};

use crate::types::MergePolicy;

pub mod builder;
pub mod edge;
pub mod interner;
pub mod metrics;
pub mod node;
pub mod pruning;
pub(crate) mod view;

pub use builder::GraphBuilder;
pub use edge::JournalEdge;
pub use interner::{AuthorInterner, AuthorRegistry, XxBuildHasher};
pub use metrics::GraphMetrics;
pub use node::AuthorNode;
pub use pruning::GraphPruner;

/// Underlying petgraph storage. Stable indices keep removal lists valid
/// while they are applied.
pub type InnerGraph = StableUnGraph<AuthorNode, JournalEdge>;

/// Undirected, simple, weighted graph of authors.
///
/// At most one edge exists per unordered author pair; repeated pairs are
/// folded according to a [`MergePolicy`].
#[derive(Debug)]
pub struct CoauthorGraph {
    inner: InnerGraph,
    registry: AuthorRegistry,
}

impl Default for CoauthorGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl CoauthorGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            inner: InnerGraph::default(),
            registry: AuthorRegistry::default(),
        }
    }

    /// Access the underlying petgraph graph (for advanced operations).
    pub fn inner(&self) -> &InnerGraph {
        &self.inner
    }

    /// Number of authors.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of author pairs connected by an edge.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Return the node for `name`, inserting it if absent.
    pub fn add_author(&mut self, name: &str) -> NodeIndex {
        let id = self.registry.intern(name);
        if let Some(idx) = self.registry.node(id) {
            return idx;
        }
        let idx = self.inner.add_node(AuthorNode::new(id, name.to_string()));
        self.registry.bind(id, idx);
        idx
    }

    /// Insert an edge between two authors, or fold it into the existing one.
    ///
    /// Returns `true` when a new edge was created. Self-loops are rejected
    /// and return `false` without touching the graph.
    pub fn upsert_edge(
        &mut self,
        a: &str,
        b: &str,
        edge: JournalEdge,
        policy: MergePolicy,
        separator: &str,
    ) -> bool {
        if a == b {
            return false;
        }
        let ia = self.add_author(a);
        let ib = self.add_author(b);
        match self.inner.find_edge(ia, ib) {
            Some(eid) => {
                if let Some(existing) = self.inner.edge_weight_mut(eid) {
                    existing.merge(edge, policy, separator);
                }
                false
            }
            None => {
                self.inner.add_edge(ia, ib, edge);
                true
            }
        }
    }

    /// Node index for an author name, if present.
    pub fn author_index(&self, name: &str) -> Option<NodeIndex> {
        self.registry.lookup(name)
    }

    /// Author name stored at a node index.
    pub fn author_name(&self, idx: NodeIndex) -> Option<&str> {
        self.inner.node_weight(idx).map(|n| n.name.as_str())
    }

    /// Whether an author is present.
    pub fn contains_author(&self, name: &str) -> bool {
        self.author_index(name).is_some()
    }

    /// Current number of incident edges of an author.
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.author_index(name).map(|idx| self.degree_of(idx))
    }

    pub(crate) fn degree_of(&self, idx: NodeIndex) -> usize {
        self.inner.neighbors(idx).count()
    }

    /// The edge between two authors, if any.
    pub fn edge(&self, a: &str, b: &str) -> Option<&JournalEdge> {
        let ia = self.author_index(a)?;
        let ib = self.author_index(b)?;
        let eid = self.inner.find_edge(ia, ib)?;
        self.inner.edge_weight(eid)
    }

    /// Weight of the edge between two authors, if any.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        self.edge(a, b).map(|e| e.weight)
    }

    /// All author names in lexicographic order.
    pub fn authors(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .inner
            .node_indices()
            .map(|idx| self.inner[idx].name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Node indices ordered by author name.
    pub(crate) fn sorted_node_indices(&self) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = self.inner.node_indices().collect();
        nodes.sort_by(|a, b| self.inner[*a].name.cmp(&self.inner[*b].name));
        nodes
    }

    /// All edges as `(source, target, edge)` with `source <= target`, sorted.
    pub fn edges(&self) -> Vec<(&str, &str, &JournalEdge)> {
        let mut out = Vec::with_capacity(self.inner.edge_count());
        for eid in self.inner.edge_indices() {
            let Some((a, b)) = self.inner.edge_endpoints(eid) else {
                continue;
            };
            let edge = &self.inner[eid];
            let (na, nb) = (self.inner[a].name.as_str(), self.inner[b].name.as_str());
            if na <= nb {
                out.push((na, nb, edge));
            } else {
                out.push((nb, na, edge));
            }
        }
        out.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
        out
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.inner.edge_indices().map(|eid| self.inner[eid].weight).sum()
    }

    /// Distinct journal labels on the edges incident to an author.
    ///
    /// Labels are taken as stored, so a composite label counts as its own
    /// label.
    pub fn author_journals(&self, name: &str) -> BTreeSet<String> {
        let Some(idx) = self.author_index(name) else {
            return BTreeSet::new();
        };
        self.incident_journals(idx)
    }

    fn incident_journals(&self, idx: NodeIndex) -> BTreeSet<String> {
        let mut labels = BTreeSet::new();
        for nbr in self.inner.neighbors(idx) {
            if let Some(eid) = self.inner.find_edge(idx, nbr) {
                labels.insert(self.inner[eid].journal.clone());
            }
        }
        labels
    }

    /// Authors whose incident edges carry more than one distinct journal
    /// label, sorted by name.
    pub fn bridging_authors(&self) -> Vec<String> {
        self.sorted_node_indices()
            .into_iter()
            .filter(|&idx| self.incident_journals(idx).len() > 1)
            .map(|idx| self.inner[idx].name.clone())
            .collect()
    }

    /// A new graph holding only the named authors and the edges among them.
    /// Names not present in this graph are ignored.
    pub fn induced_subgraph<S: AsRef<str>>(&self, names: &[S]) -> CoauthorGraph {
        let keep: HashSet<NodeIndex> = names
            .iter()
            .filter_map(|n| self.author_index(n.as_ref()))
            .collect();

        let mut sub = CoauthorGraph::new();
        for &idx in &keep {
            sub.add_author(&self.inner[idx].name);
        }
        for eid in self.inner.edge_indices() {
            let Some((a, b)) = self.inner.edge_endpoints(eid) else {
                continue;
            };
            if keep.contains(&a) && keep.contains(&b) {
                let ia = sub.add_author(&self.inner[a].name);
                let ib = sub.add_author(&self.inner[b].name);
                sub.inner.add_edge(ia, ib, self.inner[eid].clone());
            }
        }
        sub
    }

    pub(crate) fn remove_edges(&mut self, edges: &[EdgeIndex]) -> usize {
        edges
            .iter()
            .filter(|&&eid| self.inner.remove_edge(eid).is_some())
            .count()
    }

    pub(crate) fn remove_authors(&mut self, nodes: &[NodeIndex]) -> usize {
        let mut removed = 0;
        for &idx in nodes {
            if let Some(node) = self.inner.remove_node(idx) {
                self.registry.unbind(node.id);
                removed += 1;
            }
        }
        removed
    }
}
