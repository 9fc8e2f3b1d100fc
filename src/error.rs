//! Error types for saving and exporting survey records

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    /// The route code failed its allow-list check; nothing was written
    #[error("Please correct the Route Code.")]
    Validation { route: String },

    #[error("Error: {0}")]
    Io(#[from] std::io::Error),

    /// Export requested before any record was saved
    #[error("No data file found.")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, SurveyError>;
