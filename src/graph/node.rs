//! Author node definition.

use crate::types::AuthorId;

/// A node in the co-authorship graph.
#[derive(Debug, Clone)]
pub struct AuthorNode {
    /// Interned author identifier.
    pub id: AuthorId,
    /// Author name as it appeared in the edge source.
    pub name: String,
}

impl AuthorNode {
    /// Create a new author node.
    pub fn new(id: AuthorId, name: String) -> Self {
        Self { id, name }
    }
}
