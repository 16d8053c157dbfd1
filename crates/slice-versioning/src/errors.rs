//! ---
//! slice_section: "01-version-resolution"
//! slice_subsection: "module"
//! slice_type: "source"
//! slice_scope: "code"
//! slice_description: "Version derivation and caching for the packaging step."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VersionError>;

/// Failure modes of the version resolution pipeline.
///
/// Only the load path is fatal: without a seeded artifact the packaging step
/// has no version to report. Everything upstream (a missing source-control
/// tool, a descriptor that does not match the release pattern) degrades to
/// the cached value instead of erroring.
#[derive(Debug, Error)]
pub enum VersionError {
    /// The version artifact has never been seeded.
    #[error("version artifact {} is missing", .0.display())]
    Missing(PathBuf),
    /// The version artifact exists but does not parse as a version record.
    #[error("version artifact {} is malformed: {source}", .path.display())]
    Malformed {
        /// Path of the offending artifact.
        path: PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// I/O failure while reading or writing the artifact.
    #[error("I/O error on version artifact {}: {source}", .path.display())]
    Io {
        /// Path of the artifact being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
