//! FILENAME: ingest/src/source.rs
//! PURPOSE: The injected "fetch raw document" capability.
//! CONTEXT: Retrieval of the facility sheet is an external concern. The
//! core only needs one opaque operation: return the complete document text
//! or fail. Network transports implement `DocumentSource` outside this
//! workspace and map non-success responses to `IngestError::Status`.

use std::path::{Path, PathBuf};

use crate::error::IngestError;

/// Produces the complete raw text of the facility document.
///
/// One fetch is one request: there is no streaming or partial consumption,
/// and a failed fetch yields no data at all.
pub trait DocumentSource {
    fn fetch(&self) -> Result<String, IngestError>;
}

/// Reads the document from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<String, IngestError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

/// Serves a fixed in-memory document. Useful for tests and for embedding a
/// bundled sheet.
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        StaticSource { text: text.into() }
    }
}

impl DocumentSource for StaticSource {
    fn fetch(&self) -> Result<String, IngestError> {
        Ok(self.text.clone())
    }
}
