//! Append-only delimited store for survey records

use super::record::{SurveyRecord, HEADERS};
use super::share::ShareTarget;
use crate::error::{Result, SurveyError};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Field separator; commas are common in free-text locations
const DELIMITER: u8 = b';';

/// Default store file name inside the data directory
pub const DEFAULT_FILE_NAME: &str = "survey_data.csv";

/// What the export action ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The share collaborator accepted the file
    Shared,
    /// Sharing was unavailable; only the location can be reported
    PathOnly(PathBuf),
}

/// The store file and the operations on it
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Append one record, preceded by the header row if the store is new.
    ///
    /// The bytes are assembled first and written with a single call, so a
    /// failure never leaves a partial row behind.
    pub fn append(&self, record: &SurveyRecord) -> Result<()> {
        let is_new = !self.exists();
        let bytes = encode_rows(record, is_new)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&bytes)?;
        file.flush()?;

        tracing::info!(
            "Appended record {} to {}",
            record.timestamp(),
            self.path.display()
        );
        Ok(())
    }

    /// Hand the store to `share`. Fails when nothing was ever saved.
    pub fn export(&self, share: &dyn ShareTarget) -> Result<ExportOutcome> {
        if !self.exists() {
            return Err(SurveyError::NotFound(self.path.clone()));
        }
        match share.share_file(&self.path) {
            Ok(()) => {
                tracing::info!("Shared {}", self.path.display());
                Ok(ExportOutcome::Shared)
            }
            Err(err) => {
                tracing::warn!("Share unavailable, reporting path instead: {err:#}");
                Ok(ExportOutcome::PathOnly(self.path.clone()))
            }
        }
    }
}

/// Encode the optional header and the record as `;`-delimited rows.
///
/// Fields containing the delimiter, quotes or newlines are quoted.
fn encode_rows(record: &SurveyRecord, with_header: bool) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_writer(Vec::new());
    if with_header {
        writer.write_record(HEADERS).map_err(io::Error::from)?;
    }
    writer
        .write_record(record.columns())
        .map_err(io::Error::from)?;
    writer
        .into_inner()
        .map_err(|e| SurveyError::Io(e.into_error()))
}
