//! Edge-table ingestion: `Source,Target,Weight,Journal` CSV into records.

pub mod loader;

pub use loader::{EdgeRecord, EdgeTable, REQUIRED_COLUMNS};
