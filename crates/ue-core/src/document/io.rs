//! File I/O for documents.
//!
//! Files are UTF-8 on disk and internal codepage in memory; conversion goes
//! through [`crate::codec`] in both directions.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::codec::{decode_bounded, encode_slice};

use super::Document;

impl Document {
    /// Opens a document from `path`.
    ///
    /// A missing file is not an error: it yields an empty document flagged
    /// as new, which is created on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if its
    /// decoded contents don't fit in `capacity`.
    pub fn open(path: &Path, capacity: usize) -> Result<Self> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "new file");
                return Ok(Self::new(capacity));
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read file: {}", path.display()));
            }
        };

        let text = decode_bounded(&bytes, capacity)
            .with_context(|| format!("file too large: {}", path.display()))?;
        let mut doc = Self::from_bytes(&text, capacity)
            .with_context(|| format!("file too large: {}", path.display()))?;
        doc.is_new = false;

        tracing::info!(
            path = %path.display(),
            file_bytes = bytes.len(),
            doc_bytes = doc.len(),
            "opened file"
        );
        Ok(doc)
    }

    /// Saves the document to `path` as UTF-8.
    ///
    /// On success the document is no longer modified nor new.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        let bytes = encode_slice(self.as_bytes());
        std::fs::write(path, &bytes)
            .with_context(|| format!("failed to write file: {}", path.display()))?;

        self.modified = false;
        self.is_new = false;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "saved file");
        Ok(())
    }
}
