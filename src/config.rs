//! Runtime settings read from `config.json` inside the data directory. Every
//! field has a default so a missing file, or a file that only sets one key,
//! is fine.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;

use crate::error::DataError;
use crate::views::SemesterPolicy;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".university-portal";
/// Settings file name stored inside the data directory.
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Faculty member the faculty portal is shown for.
    pub current_faculty_id: String,
    /// Student the student portal is shown for.
    pub current_student_id: String,
    /// Recorded as the reviewer on content review intents.
    pub reviewer_id: String,
    /// Directory that content `fileUrl` paths are resolved against.
    pub content_root: Option<PathBuf>,
    pub semester_policy: SemesterPolicy,
    pub hours_per_class: f64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_faculty_id: "1".to_string(),
            current_student_id: "1".to_string(),
            reviewer_id: "admin1".to_string(),
            content_root: None,
            semester_policy: SemesterPolicy::default(),
            hours_per_class: 1.5,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Read `config.json` from `dir`, falling back to defaults when the file
    /// does not exist.
    pub fn load(dir: &Path) -> Result<Self, DataError> {
        let path = dir.join(CONFIG_FILE_NAME);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(DataError::Read { path, source }),
        };
        serde_json::from_str(&raw).map_err(|source| DataError::Parse { path, source })
    }

    /// Resolve a content `fileUrl` to a local path under `content_root`.
    pub fn content_path(&self, file_url: &str) -> Option<PathBuf> {
        let root = self.content_root.as_ref()?;
        let relative = file_url.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }
        Some(root.join(relative))
    }
}

/// Resolve the absolute path of the application data directory.
pub fn data_dir() -> Result<PathBuf, DataError> {
    let base_dirs = BaseDirs::new().ok_or(DataError::NoHomeDir)?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "currentFacultyId": "2", "semesterPolicy": "odd_term" }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.current_faculty_id, "2");
        assert_eq!(config.semester_policy, SemesterPolicy::OddTerm);
        assert_eq!(config.reviewer_id, "admin1");
        assert_eq!(config.hours_per_class, 1.5);
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test]
    fn content_path_requires_root() {
        let mut config = Config::default();
        assert_eq!(config.content_path("/content/a.pdf"), None);

        config.content_root = Some(PathBuf::from("/srv/uni"));
        assert_eq!(
            config.content_path("/content/a.pdf"),
            Some(PathBuf::from("/srv/uni/content/a.pdf"))
        );
        assert_eq!(config.content_path(""), None);
    }
}
