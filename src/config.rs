//! Configuration handling for the survey form

use crate::state::default_route_codes;
use crate::store::DEFAULT_FILE_NAME;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, every key optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SurveyConfig {
    /// Directory holding the store file
    pub data_dir: Option<PathBuf>,
    /// Store file name
    pub file_name: Option<String>,
    /// Accepted route codes
    pub route_codes: Option<Vec<String>>,
    /// Interviewer ID remembered from the last saved record
    pub interviewer_id: Option<String>,
}

impl SurveyConfig {
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "od-survey", "od-survey-tui")
    }

    /// Default config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from `path`, defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SurveyConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load the config at `path` along with the path it may be saved back to.
    ///
    /// A file that fails to load yields defaults and no save path, so a
    /// hand-edited file with a typo is never overwritten.
    pub fn load_or_default(path: Option<PathBuf>) -> (Self, Option<PathBuf>) {
        let Some(path) = path else {
            return (Self::default(), None);
        };
        match Self::load_from(&path) {
            Ok(config) => (config, Some(path)),
            Err(err) => {
                tracing::warn!(
                    "Ignoring unreadable config {}, it will not be rewritten: {err:#}",
                    path.display()
                );
                (Self::default(), None)
            }
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn route_codes(&self) -> Vec<String> {
        self.route_codes
            .clone()
            .filter(|codes| !codes.is_empty())
            .unwrap_or_else(default_route_codes)
    }

    pub fn file_name(&self) -> &str {
        self.file_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
    }
}
