#![allow(dead_code)]

use cograph_core::{CoauthorGraph, CographConfig, EdgeRecord, EdgeTable, GraphBuilder, MergePolicy};

pub fn record(source: &str, target: &str, weight: f64, journal: &str) -> EdgeRecord {
    EdgeRecord {
        source: source.to_string(),
        target: target.to_string(),
        weight,
        journal: journal.to_string(),
    }
}

/// Build a graph from `(source, target, weight)` triples, all in one journal.
pub fn graph_from(edges: &[(&str, &str, f64)]) -> CoauthorGraph {
    graph_with_policy(edges, MergePolicy::LastWriteWins)
}

pub fn graph_with_policy(edges: &[(&str, &str, f64)], policy: MergePolicy) -> CoauthorGraph {
    let records = edges
        .iter()
        .map(|&(a, b, w)| record(a, b, w, "crisis-edges"))
        .collect();
    let table = EdgeTable::from_records(records).expect("valid fixture");
    GraphBuilder::new(&CographConfig::default())
        .with_merge_policy(policy)
        .build(&table)
}

/// Complete graph over `names` with every edge weighted `weight`.
pub fn complete(names: &[&str], weight: f64) -> Vec<(String, String, f64)> {
    let mut out = Vec::new();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            out.push((names[i].to_string(), names[j].to_string(), weight));
        }
    }
    out
}

pub fn graph_from_owned(edges: &[(String, String, f64)]) -> CoauthorGraph {
    let borrowed: Vec<(&str, &str, f64)> = edges
        .iter()
        .map(|(a, b, w)| (a.as_str(), b.as_str(), *w))
        .collect();
    graph_from(&borrowed)
}

/// A hub connected to `leaves` leaf nodes named `leaf0..`.
pub fn star(leaves: usize) -> CoauthorGraph {
    let edges: Vec<(String, String, f64)> = (0..leaves)
        .map(|i| ("hub".to_string(), format!("leaf{i}"), 1.0))
        .collect();
    graph_from_owned(&edges)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
