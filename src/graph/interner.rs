//! Author-name interning and the name → node lookup built on it.

use std::collections::HashMap;
use std::hash::BuildHasher;

use lasso::{Rodeo, Spur};
use petgraph::stable_graph::NodeIndex;
use twox_hash::XxHash64;

use crate::types::AuthorId;

/// XxHash64 build hasher for the interner's string table.
#[derive(Clone, Copy, Debug, Default)]
pub struct XxBuildHasher;

impl BuildHasher for XxBuildHasher {
    type Hasher = XxHash64;
    fn build_hasher(&self) -> Self::Hasher {
        XxHash64::default()
    }
}

/// String table for author names.
pub type AuthorInterner = Rodeo<Spur, XxBuildHasher>;

/// Maps author names to the graph nodes currently holding them.
///
/// Names stay interned after their node is removed, so re-adding an
/// author reuses its [`AuthorId`].
#[derive(Debug)]
pub struct AuthorRegistry {
    names: AuthorInterner,
    nodes: HashMap<AuthorId, NodeIndex>,
}

impl Default for AuthorRegistry {
    fn default() -> Self {
        Self {
            names: AuthorInterner::with_hasher(XxBuildHasher),
            nodes: HashMap::new(),
        }
    }
}

impl AuthorRegistry {
    /// Id for `name`, interning it on first sight.
    pub fn intern(&mut self, name: &str) -> AuthorId {
        AuthorId(self.names.get_or_intern(name))
    }

    /// Id for `name` if it was ever interned.
    pub fn id_of(&self, name: &str) -> Option<AuthorId> {
        self.names.get(name).map(AuthorId)
    }

    /// Node currently bound to `id`.
    pub fn node(&self, id: AuthorId) -> Option<NodeIndex> {
        self.nodes.get(&id).copied()
    }

    /// Node currently bound to `name`.
    pub fn lookup(&self, name: &str) -> Option<NodeIndex> {
        self.id_of(name).and_then(|id| self.node(id))
    }

    pub(crate) fn bind(&mut self, id: AuthorId, idx: NodeIndex) {
        self.nodes.insert(id, idx);
    }

    pub(crate) fn unbind(&mut self, id: AuthorId) {
        self.nodes.remove(&id);
    }

    /// Number of distinct names ever interned.
    pub fn interned(&self) -> usize {
        self.names.len()
    }
}
