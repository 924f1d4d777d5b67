// themesweep-core/src/infrastructure/manifest.rs
//
// Manifest loading adapter. Parsing is two-staged so that "not JSON" and
// "JSON of the wrong shape" fail with distinct error kinds.

use std::path::Path;
use tracing::instrument;

use crate::domain::manifest::Manifest;
use crate::infrastructure::error::InfrastructureError;

/// Parse manifest text into the typed manifest map.
pub fn parse_manifest(raw: &str) -> Result<Manifest, InfrastructureError> {
    // 1. Le document est-il du JSON valide ?
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(InfrastructureError::ManifestParse)?;

    // 2. A-t-il la forme attendue ?
    serde_json::from_value(value).map_err(InfrastructureError::ManifestSchema)
}

/// Read and parse the manifest file at `path`.
#[instrument]
pub fn load_manifest(path: &Path) -> Result<Manifest, InfrastructureError> {
    let raw = std::fs::read_to_string(path)?;
    parse_manifest(&raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_parse_valid_manifest() {
        let manifest = parse_manifest(r#"{ "main.js": { "file": "main-abc.js" } }"#).unwrap();

        assert_eq!(manifest.chunks["main.js"].file, "main-abc.js");
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = parse_manifest("{ not json").unwrap_err();

        assert!(matches!(err, InfrastructureError::ManifestParse(_)));
    }

    #[test]
    fn test_wrong_shape_is_a_schema_error() {
        // Valid JSON, but the block is missing its 'file' field
        let err = parse_manifest(r#"{ "main.js": { "imports": [] } }"#).unwrap_err();

        assert!(matches!(err, InfrastructureError::ManifestSchema(_)));
    }

    #[test]
    fn test_load_manifest_from_disk() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, r#"{ "a.js": { "file": "a-1.js" } }"#)?;

        let manifest = load_manifest(&path)?;

        assert_eq!(manifest.chunks.len(), 1);
        Ok(())
    }

    #[test]
    fn test_load_manifest_missing_file_is_io() {
        let err = load_manifest(Path::new("/nonexistent/manifest.json")).unwrap_err();

        assert!(matches!(err, InfrastructureError::Io(_)));
    }
}
