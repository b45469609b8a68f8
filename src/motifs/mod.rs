//! Motif discovery over the current graph state: weighted triads and
//! maximum cliques. Nothing here mutates the graph.

pub mod cliques;
pub mod triads;

pub use cliques::{find_max_clique, maximal_cliques, Clique};
pub use triads::{candidate_triples, find_triads, Triad, TriadScan};
