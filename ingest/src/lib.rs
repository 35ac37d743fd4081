//! FILENAME: ingest/src/lib.rs
//! Facility Atlas Ingestion Module
//!
//! Turns a raw CSV document into the in-memory facility collection and
//! owns its lifecycle: the collection is replaced wholesale on a successful
//! reload and left untouched when retrieval fails.

mod error;
mod source;

pub use error::IngestError;
pub use source::{DocumentSource, FileSource, StaticSource};

use chrono::{DateTime, Utc};
use engine::{map_rows, ColumnMap, Facility};

/// Tokenizes and maps a complete document into records.
///
/// Parse anomalies never fail: malformed cells degrade to absent fields and
/// blank rows are dropped.
pub fn parse_document(text: &str) -> Vec<Facility> {
    let rows = parser::tokenize(text);

    if let Some(header) = rows.first() {
        let missing = ColumnMap::from_header(header).missing_columns();
        if !missing.is_empty() {
            log::debug!("columns absent from header: {}", missing.join(", "));
        }
    }

    map_rows(&rows)
}

// ============================================================================
// DATASET
// ============================================================================

/// The base facility collection, plus the time of the last successful fetch.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    facilities: Vec<Facility>,
    fetched_at: Option<DateTime<Utc>>,
}

impl Dataset {
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Fetches and parses a fresh dataset.
    pub fn load(source: &dyn DocumentSource) -> Result<Self, IngestError> {
        let mut dataset = Dataset::new();
        dataset.reload(source)?;
        Ok(dataset)
    }

    /// Re-fetches the document and replaces the collection wholesale.
    ///
    /// On any fetch failure the previous collection (and its timestamp) is
    /// left untouched; partial data is never applied. Retrying is the
    /// caller's decision.
    pub fn reload(&mut self, source: &dyn DocumentSource) -> Result<(), IngestError> {
        let text = source.fetch()?;
        let facilities = parse_document(&text);
        log::debug!("loaded {} facilities", facilities.len());

        self.facilities = facilities;
        self.fetched_at = Some(Utc::now());
        Ok(())
    }

    /// The base collection, in source-row order.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Time of the last successful fetch, if any.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}
