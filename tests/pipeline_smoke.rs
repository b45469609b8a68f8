mod common;

use std::path::PathBuf;

use cograph_core::persistence::{export_edges, load_report, save_report};
use cograph_core::pipeline::PruneSummary;
use cograph_core::{
    AnalysisPipeline, CentralityKind, CographConfig, CographError, EdgeTable, GraphBuilder, MergePolicy,
    TriadStrategy,
};
use common::approx_eq;
use tempfile::tempdir;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_edges.csv")
}

fn pruned_config() -> CographConfig {
    CographConfig {
        min_edge_weight: 2.0,
        min_degree: 2,
        ..Default::default()
    }
}

#[test]
fn sample_pipeline_end_to_end() -> anyhow::Result<()> {
    let table = EdgeTable::from_path(sample_path())?;
    let (graph, report) = AnalysisPipeline::new(pruned_config()).run(&table)?;

    assert_eq!(report.before.num_nodes, 10);
    assert_eq!(report.before.num_edges, 14);
    assert_eq!(
        report.pruning,
        PruneSummary {
            edges_removed: 5,
            nodes_removed: 2
        }
    );
    assert_eq!(report.after.num_nodes, 8);
    assert_eq!(report.after.num_edges, 9);
    assert!(!graph.contains_author("Ford Madox Ford"));
    assert!(!graph.contains_author("Harriet Monroe"));

    let weights: Vec<f64> = report.triads.triads.iter().map(|t| t.weight).collect();
    assert_eq!(weights, vec![15.0, 10.0, 9.0]);
    assert_eq!(
        report.triads.triads[0].members,
        [
            "Jessie Fauset".to_string(),
            "Langston Hughes".to_string(),
            "W. E. B. Du Bois".to_string()
        ]
    );
    assert_eq!(report.triads.examined, 56);

    assert_eq!(
        report.max_clique.members,
        vec!["Amy Lowell", "Ezra Pound", "T. S. Eliot"]
    );
    assert_eq!(report.bridging_authors, vec!["Ezra Pound".to_string()]);

    assert_eq!(report.centrality.len(), 4);
    let degree = &report.centrality[0];
    assert_eq!(degree.kind, Some(CentralityKind::Degree));
    assert!(approx_eq(degree.score("Ezra Pound").unwrap_or_default(), 4.0 / 7.0));
    let betweenness = &report.centrality[1];
    assert!(approx_eq(
        betweenness.score("Ezra Pound").unwrap_or_default(),
        4.0 / 21.0
    ));
    assert_eq!(betweenness.max().map(|(n, _)| n), Some("Ezra Pound".to_string()));
    Ok(())
}

#[test]
fn neighbor_strategy_reports_the_same_triads() -> anyhow::Result<()> {
    let table = EdgeTable::from_path(sample_path())?;
    let exhaustive = AnalysisPipeline::new(pruned_config()).with_kinds(vec![]);
    let neighbor = AnalysisPipeline::new(CographConfig {
        triad_strategy: TriadStrategy::NeighborIntersection,
        ..pruned_config()
    })
    .with_kinds(vec![]);

    let (_, a) = exhaustive.run(&table)?;
    let (_, b) = neighbor.run(&table)?;
    assert_eq!(a.triads.triads, b.triads.triads);
    assert!(b.triads.examined < a.triads.examined);
    assert!(a.centrality.is_empty());
    Ok(())
}

#[test]
fn unpruned_sample_keeps_composite_label() -> anyhow::Result<()> {
    let table = EdgeTable::from_path(sample_path())?;
    let graph = GraphBuilder::new(&CographConfig::default()).build(&table);

    assert_eq!(graph.node_count(), 10);
    assert_eq!(
        graph.edge("Rebecca West", "T. S. Eliot").map(|e| e.journal.as_str()),
        Some("crisis-edges/marsden-edges")
    );
    let journals: Vec<&str> = graph
        .edge("Rebecca West", "T. S. Eliot")
        .map(|e| e.journals("/").collect())
        .unwrap_or_default();
    assert_eq!(journals, vec!["crisis-edges", "marsden-edges"]);
    Ok(())
}

#[test]
fn invalid_config_stops_the_run() -> anyhow::Result<()> {
    let table = EdgeTable::from_path(sample_path())?;
    let config = CographConfig {
        min_edge_weight: -1.0,
        ..Default::default()
    };
    assert!(AnalysisPipeline::new(config).run(&table).is_err());
    Ok(())
}

#[test]
fn run_on_graph_rejects_nan_threshold() -> anyhow::Result<()> {
    let table = EdgeTable::from_path(sample_path())?;
    let mut graph = GraphBuilder::new(&CographConfig::default()).build(&table);
    let config = CographConfig {
        min_edge_weight: f64::NAN,
        ..Default::default()
    };

    let result = AnalysisPipeline::new(config).run_on_graph(&mut graph);
    assert!(matches!(result, Err(CographError::Config(_))));
    assert_eq!(graph.edge_count(), 14);
    Ok(())
}

#[test]
fn report_survives_save_and_load() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("reports/sample.json");

    let config = CographConfig {
        merge_policy: MergePolicy::Sum,
        ..pruned_config()
    };
    let table = EdgeTable::from_path(sample_path())?;
    let (_, report) = AnalysisPipeline::new(config.clone()).run(&table)?;

    save_report(&path, &report, &config)?;
    let loaded = load_report(&path)?;

    assert_eq!(loaded.metadata.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(loaded.metadata.config.merge_policy, MergePolicy::Sum);
    assert_eq!(loaded.report.after.num_nodes, report.after.num_nodes);
    assert_eq!(loaded.report.after.num_edges, report.after.num_edges);
    assert_eq!(loaded.report.pruning, report.pruning);
    assert_eq!(loaded.report.triads.triads, report.triads.triads);
    assert_eq!(loaded.report.max_clique, report.max_clique);
    assert_eq!(loaded.report.centrality.len(), report.centrality.len());
    Ok(())
}

#[test]
fn exported_edges_load_back_identically() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let out = dir.path().join("pruned.csv");

    let table = EdgeTable::from_path(sample_path())?;
    let (graph, _) = AnalysisPipeline::new(pruned_config())
        .with_kinds(vec![])
        .run(&table)?;

    let written = export_edges(&out, &graph)?;
    assert_eq!(written, 9);

    let reloaded = GraphBuilder::new(&CographConfig::default()).build(&EdgeTable::from_path(&out)?);
    assert_eq!(reloaded.edges(), graph.edges());
    assert_eq!(reloaded.authors(), graph.authors());
    Ok(())
}
