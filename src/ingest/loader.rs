use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{CographError, Result};

/// Columns every edge source must carry, in the order they are reported.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Source", "Target", "Weight", "Journal"];

/// One row of the edge table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// First endpoint (author name).
    pub source: String,
    /// Second endpoint (author name).
    pub target: String,
    /// Co-occurrence strength, non-negative.
    pub weight: f64,
    /// Journal label; may be a composite of several labels.
    pub journal: String,
}

/// An in-memory edge table, validated and ready for graph construction.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    records: Vec<EdgeRecord>,
}

struct ColumnMap {
    source: usize,
    target: usize,
    weight: usize,
    journal: usize,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
            .map(str::trim)
            .collect();

        let find = |wanted: &str| names.iter().position(|h| *h == wanted);

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| find(*c).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(CographError::MalformedInput(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let require = |wanted: &str| {
            find(wanted).ok_or_else(|| {
                CographError::MalformedInput(format!("missing required column: {wanted}"))
            })
        };
        Ok(Self {
            source: require("Source")?,
            target: require("Target")?,
            weight: require("Weight")?,
            journal: require("Journal")?,
        })
    }
}

impl EdgeTable {
    /// Build a table directly from records, applying the same checks as CSV
    /// ingestion.
    pub fn from_records(records: Vec<EdgeRecord>) -> Result<Self> {
        for (i, rec) in records.iter().enumerate() {
            validate_record(rec, i as u64 + 1)?;
        }
        Ok(Self { records })
    }

    /// Read a CSV edge table from any reader.
    ///
    /// Fails without partial results if a required column is missing or any
    /// row holds an empty endpoint or a non-numeric/negative weight.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns = ColumnMap::resolve(rdr.headers()?)?;

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let field = |idx: usize, name: &str| -> Result<String> {
                row.get(idx).map(|v| v.trim().to_string()).ok_or_else(|| {
                    CographError::MalformedInput(format!("line {line}: missing value for '{name}'"))
                })
            };

            let raw_weight = field(columns.weight, "Weight")?;
            let weight: f64 = raw_weight.parse().map_err(|_| {
                CographError::MalformedInput(format!(
                    "line {line}: weight '{raw_weight}' is not numeric"
                ))
            })?;

            let rec = EdgeRecord {
                source: field(columns.source, "Source")?,
                target: field(columns.target, "Target")?,
                weight,
                journal: field(columns.journal, "Journal")?,
            };
            validate_record(&rec, line)?;
            records.push(rec);
        }

        debug!(rows = records.len(), "edge table parsed");
        Ok(Self { records })
    }

    /// Read a CSV edge table from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(file).map_err(|e| match e {
            CographError::MalformedInput(msg) => {
                CographError::MalformedInput(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        info!(path = %path.display(), rows = table.len(), "loaded edge table");
        Ok(table)
    }

    /// Read several CSV files and concatenate their rows in the given order.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut merged = Self::default();
        for path in paths {
            let table = Self::from_path(path)?;
            merged.records.extend(table.records);
        }
        Ok(merged)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the rows in source order.
    pub fn iter(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.records.iter()
    }

    /// Consume the table and return its rows.
    pub fn into_records(self) -> Vec<EdgeRecord> {
        self.records
    }
}

fn validate_record(rec: &EdgeRecord, line: u64) -> Result<()> {
    if rec.source.is_empty() || rec.target.is_empty() {
        return Err(CographError::MalformedInput(format!("line {line}: empty endpoint")));
    }
    if !rec.weight.is_finite() {
        return Err(CographError::MalformedInput(format!(
            "line {line}: weight {} is not a finite number",
            rec.weight
        )));
    }
    if rec.weight < 0.0 {
        return Err(CographError::MalformedInput(format!(
            "line {line}: weight {} is negative",
            rec.weight
        )));
    }
    Ok(())
}
