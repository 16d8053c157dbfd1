//! ---
//! slice_section: "01-version-resolution"
//! slice_subsection: "module"
//! slice_type: "source"
//! slice_scope: "code"
//! slice_description: "Version derivation and caching for the packaging step."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{Result, VersionError};

/// Persisted version record, serialized as `{"version": "<string>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionRecord {
    /// Version string reported to the packaging step.
    pub version: String,
}

impl VersionRecord {
    /// Construct a record from any stringly version.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// On-disk store for the version artifact.
///
/// The store owns a single JSON file. `save` overwrites it whole; `load` is
/// the only operation that can fail the packaging step, and it does so when
/// the artifact was never seeded or no longer parses.
#[derive(Debug, Clone)]
pub struct VersionStore {
    path: PathBuf,
}

impl VersionStore {
    /// Create a store rooted at the given artifact path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying artifact.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the artifact with the serialized record.
    pub fn save(&self, record: &VersionRecord) -> Result<()> {
        let serialized =
            serde_json::to_string(record).map_err(|source| VersionError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, serialized).map_err(|source| VersionError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), version = %record.version, "version artifact written");
        Ok(())
    }

    /// Read the artifact back and return the stored record.
    pub fn load(&self) -> Result<VersionRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(VersionError::Missing(self.path.clone()));
            }
            Err(source) => {
                return Err(VersionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&raw).map_err(|source| VersionError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_returns_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = VersionStore::new(dir.path().join("version.json"));
        let record = VersionRecord::new("1.2.3.post4");
        store.save(&record).expect("save succeeds");
        assert_eq!(store.load().expect("load succeeds"), record);
    }

    #[test]
    fn missing_artifact_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = VersionStore::new(dir.path().join("version.json"));
        let err = store.load().expect_err("load should fail");
        assert!(matches!(err, VersionError::Missing(_)));
    }

    #[test]
    fn malformed_artifact_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("version.json");
        std::fs::write(&path, "{\"release\": \"1.2.3\"}").expect("seed artifact");
        let store = VersionStore::new(&path);
        let err = store.load().expect_err("load should fail");
        assert!(matches!(err, VersionError::Malformed { .. }));

        std::fs::write(&path, "not json at all").expect("seed artifact");
        let err = store.load().expect_err("load should fail");
        assert!(matches!(err, VersionError::Malformed { .. }));
    }

    #[test]
    fn save_writes_exact_record_shape() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("version.json");
        let store = VersionStore::new(&path);
        store
            .save(&VersionRecord::new("1.2.3.post4"))
            .expect("save succeeds");
        let raw = std::fs::read_to_string(&path).expect("artifact readable");
        assert_eq!(raw, "{\"version\":\"1.2.3.post4\"}");
    }
}
