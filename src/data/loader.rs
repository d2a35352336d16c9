use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::DataError;
use crate::models::Dataset;

use super::fixture::builtin_dataset;

/// Dataset override file name stored inside the data directory.
const DATASET_FILE_NAME: &str = "dataset.json";

/// Where the loaded dataset came from, for the header and the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Builtin,
    File(std::path::PathBuf),
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::Builtin => "built-in sample data".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Load `dataset.json` from `dir` when it exists, otherwise the built-in
/// fixture. A file that exists but cannot be read or parsed is an error
/// rather than a silent fallback.
pub fn load_dataset(dir: &Path) -> Result<(Dataset, Source), DataError> {
    let path = dir.join(DATASET_FILE_NAME);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("no {} in {}, using built-in data", DATASET_FILE_NAME, dir.display());
            return Ok((builtin_dataset(), Source::Builtin));
        }
        Err(source) => return Err(DataError::Read { path, source }),
    };

    let dataset = parse_dataset(&raw).map_err(|source| DataError::Parse {
        path: path.clone(),
        source,
    })?;
    log::info!(
        "loaded {} programmes, {} courses, {} content items from {}",
        dataset.programmes.len(),
        dataset.courses.len(),
        dataset.academic_content.len(),
        path.display()
    );
    Ok((dataset, Source::File(path)))
}

/// The dataset file must hold a JSON object. Every collection defaults to
/// empty, so without this check serde would also accept a bare array.
fn parse_dataset(raw: &str) -> Result<Dataset, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("dataset must be a JSON object"));
    }
    serde_json::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn falls_back_to_builtin() {
        let dir = TempDir::new().unwrap();
        let (dataset, source) = load_dataset(dir.path()).unwrap();
        assert_eq!(source, Source::Builtin);
        assert_eq!(dataset, builtin_dataset());
    }

    #[test]
    fn reads_override_file() {
        let dir = TempDir::new().unwrap();
        let mut expected = builtin_dataset();
        expected.courses.truncate(2);
        expected.academic_content.clear();
        fs::write(
            dir.path().join(DATASET_FILE_NAME),
            serde_json::to_string_pretty(&expected).unwrap(),
        )
        .unwrap();

        let (dataset, source) = load_dataset(dir.path()).unwrap();
        assert_eq!(source, Source::File(dir.path().join(DATASET_FILE_NAME)));
        assert_eq!(dataset, expected);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DATASET_FILE_NAME),
            r#"{ "programmes": [{ "id": "9", "name": "Physics", "department": "Science",
                "duration": 3, "totalStudents": 12 }] }"#,
        )
        .unwrap();

        let (dataset, _) = load_dataset(dir.path()).unwrap();
        assert_eq!(dataset.programmes.len(), 1);
        assert!(dataset.courses.is_empty());
        assert!(dataset.days_of_week.is_empty());
    }

    #[test]
    fn malformed_override_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DATASET_FILE_NAME), "[]").unwrap();
        assert!(matches!(load_dataset(dir.path()), Err(DataError::Parse { .. })));

        for raw in ["[[], []]", "null", "42", "\"programmes\"", "{ \"programmes\": "] {
            fs::write(dir.path().join(DATASET_FILE_NAME), raw).unwrap();
            assert!(
                matches!(load_dataset(dir.path()), Err(DataError::Parse { .. })),
                "{raw} should not load"
            );
        }
    }
}
