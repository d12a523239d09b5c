//! Benchmark result loading.

use crate::error::{ReportError, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Load the raw benchmark values from a JSON array file.
///
/// Individual elements are returned untouched; deciding which of them are
/// router decisions is the aggregator's job.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    debug!("Reading benchmark results from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(items) => {
            info!("Loaded {} entries from {}", items.len(), path.display());
            Ok(items)
        }
        _ => Err(ReportError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_array() {
        let file = write_temp(r#"[{"RecommendedFrequency": "immediate"}, {"Other": 1}]"#);
        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_empty_array() {
        let file = write_temp("[]");
        assert!(load_records(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_records(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ReportError::Read { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_temp("[{\"RecommendedFrequency\": ");
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::Parse { .. }));
    }

    #[test]
    fn test_object_is_rejected() {
        let file = write_temp(r#"{"RecommendedFrequency": "immediate"}"#);
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::NotAnArray { .. }));
    }
}
