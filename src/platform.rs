//! Platform-specific configuration

use crate::config::SurveyConfig;
use std::path::PathBuf;

/// Save shortcut display for help text
pub const SAVE_SHORTCUT: &str = "^S";

/// Export shortcut display for help text
pub const EXPORT_SHORTCUT: &str = "^E";

/// Log file name inside `log_dir`
pub const LOG_FILE_NAME: &str = "od-survey-tui.log";

/// Directory the log file is written to
pub fn log_dir() -> PathBuf {
    SurveyConfig::project_dirs()
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(std::env::temp_dir)
}

/// Directory the store file lives in.
///
/// Configured directory first, then the platform data directory, then the
/// working directory.
pub fn data_dir(config: &SurveyConfig) -> PathBuf {
    if let Some(dir) = &config.data_dir {
        return dir.clone();
    }
    if let Some(dirs) = SurveyConfig::project_dirs() {
        return dirs.data_dir().to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Full path of the store file
pub fn store_path(config: &SurveyConfig) -> PathBuf {
    data_dir(config).join(config.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_dir_wins() {
        let config = SurveyConfig {
            data_dir: Some(PathBuf::from("/tmp/od")),
            ..Default::default()
        };
        assert_eq!(data_dir(&config), PathBuf::from("/tmp/od"));
        assert_eq!(store_path(&config), PathBuf::from("/tmp/od/survey_data.csv"));
    }

    #[test]
    fn test_log_dir_is_separate_from_store() {
        let config = SurveyConfig::default();
        assert_ne!(log_dir(), data_dir(&config));
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        let config = SurveyConfig {
            file_name: Some("route7.csv".to_string()),
            ..Default::default()
        };
        assert!(store_path(&config).ends_with("route7.csv"));
    }
}
