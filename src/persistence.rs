//! Persistence for analysis output.
//! Saves: JSON analysis reports (with metadata) and pruned edge lists as CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::CographConfig;
use crate::graph::CoauthorGraph;
use crate::ingest::REQUIRED_COLUMNS;
use crate::pipeline::AnalysisReport;

/// Metadata stored with a saved report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Version of the cograph-core library.
    pub version: String,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// Configuration used for the run.
    pub config: CographConfig,
}

impl ReportMetadata {
    /// Create new metadata with current version and timestamp.
    pub fn new(config: &CographConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            config: config.clone(),
        }
    }
}

/// A report together with its metadata, as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedReport {
    /// Provenance of the report.
    pub metadata: ReportMetadata,
    /// The analysis results.
    pub report: AnalysisReport,
}

/// Write a report as pretty-printed JSON.
pub fn save_report(path: &Path, report: &AnalysisReport, config: &CographConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let saved = SavedReport {
        metadata: ReportMetadata::new(config),
        report: report.clone(),
    };
    let file = File::create(path).context("Failed to create report file")?;
    serde_json::to_writer_pretty(BufWriter::new(file), &saved)?;
    Ok(())
}

/// Read a report written by [`save_report`].
pub fn load_report(path: &Path) -> Result<SavedReport> {
    let file = File::open(path).context("Failed to open report file")?;
    let saved: SavedReport = serde_json::from_reader(file)?;
    Ok(saved)
}

/// Write the graph's edges as a `Source,Target,Weight,Journal` CSV that
/// can be loaded again as an edge table.
pub fn export_edges(path: &Path, graph: &CoauthorGraph) -> Result<usize> {
    let file = File::create(path).context("Failed to create edge export file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    writer.write_record(REQUIRED_COLUMNS)?;

    let edges = graph.edges();
    for (source, target, edge) in &edges {
        let weight = edge.weight.to_string();
        writer.write_record([*source, *target, weight.as_str(), edge.journal.as_str()])?;
    }
    writer.flush()?;
    Ok(edges.len())
}
