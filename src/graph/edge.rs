//! Journal-attested edge definition.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::MergePolicy;

/// Edge between two authors who appeared in the same journal(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEdge {
    /// Co-occurrence strength.
    pub weight: f64,
    /// Journal label, possibly several labels joined by a separator.
    pub journal: String,
}

impl JournalEdge {
    /// Create a new edge with the given weight and journal label.
    pub fn new(weight: f64, journal: impl Into<String>) -> Self {
        Self {
            weight,
            journal: journal.into(),
        }
    }

    /// The individual labels making up a (possibly composite) journal label.
    pub fn journals<'a>(&'a self, separator: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.journal
            .split(separator)
            .map(str::trim)
            .filter(|j| !j.is_empty())
    }

    /// Fold a later observation of the same author pair into this edge.
    pub fn merge(&mut self, other: JournalEdge, policy: MergePolicy, separator: &str) {
        match policy {
            MergePolicy::LastWriteWins => *self = other,
            MergePolicy::Sum => {
                self.weight += other.weight;
                let labels: BTreeSet<&str> = self
                    .journals(separator)
                    .chain(other.journals(separator))
                    .collect();
                let joined = labels.into_iter().collect::<Vec<_>>().join(separator);
                self.journal = joined;
            }
        }
    }
}
