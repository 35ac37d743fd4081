//! FILENAME: ingest/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document request failed with status {0}")]
    Status(u16),

    #[error("document source error: {0}")]
    Source(String),
}
