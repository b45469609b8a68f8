//! Graph construction: from an edge table into a CoauthorGraph.

use std::path::Path;

use tracing::{info, warn};

use crate::{
    config::CographConfig,
    errors::Result,
    graph::{CoauthorGraph, JournalEdge},
    ingest::EdgeTable,
    types::MergePolicy,
};

/// Builder for CoauthorGraph from edge tables.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    merge_policy: MergePolicy,
    journal_separator: String,
}

impl GraphBuilder {
    /// Create a builder using the merge policy and separator from `config`.
    pub fn new(config: &CographConfig) -> Self {
        Self {
            merge_policy: config.merge_policy,
            journal_separator: config.journal_separator.clone(),
        }
    }

    /// Override the duplicate-pair merge policy.
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    /// Build the graph. Each row becomes one edge or is folded into the
    /// edge already present for the same unordered pair. A self-loop row
    /// adds its author as a node but no edge.
    pub fn build(&self, table: &EdgeTable) -> CoauthorGraph {
        let mut graph = CoauthorGraph::new();
        let mut merged = 0usize;
        let mut self_loops = 0usize;

        for rec in table.iter() {
            if rec.source == rec.target {
                // The author still counts as a node.
                graph.add_author(&rec.source);
                self_loops += 1;
                continue;
            }
            let edge = JournalEdge::new(rec.weight, rec.journal.clone());
            let created = graph.upsert_edge(
                &rec.source,
                &rec.target,
                edge,
                self.merge_policy,
                &self.journal_separator,
            );
            if !created {
                merged += 1;
            }
        }

        if self_loops > 0 {
            warn!(self_loops, "skipped self-loop rows");
        }
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            merged,
            policy = %self.merge_policy,
            "graph built"
        );
        graph
    }

    /// Load one or more edge files and build the graph from their rows.
    pub fn build_from_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<CoauthorGraph> {
        let table = EdgeTable::from_paths(paths)?;
        Ok(self.build(&table))
    }
}
