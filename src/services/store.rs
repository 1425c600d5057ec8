use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Property;

/// Errors that can occur when reading the backing properties file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(io::Error),
}

/// File-backed property store
///
/// The backing JSON file is the single source of truth and is re-read on
/// every request, so edits to it show up without a restart. The service
/// never writes to it.
#[derive(Debug, Clone)]
pub struct PropertyStore {
    path: PathBuf,
}

impl PropertyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the backing file, as rendered in error bodies.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Read and parse the full record list.
    pub fn load(&self) -> Result<Vec<Property>, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(self.file_name())
            } else {
                StoreError::Io(err)
            }
        })?;

        let records: Vec<Property> = serde_json::from_str(&raw)?;

        tracing::debug!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );

        Ok(records)
    }
}
