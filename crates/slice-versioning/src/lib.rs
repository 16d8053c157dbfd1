//! ---
//! slice_section: "01-version-resolution"
//! slice_subsection: "module"
//! slice_type: "source"
//! slice_scope: "code"
//! slice_description: "Version derivation and caching for the packaging step."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Core crate deriving the package version from source-control state and
//! persisting it to an on-disk artifact for reuse by the packaging step.

pub mod describe;
pub mod errors;
pub mod info;
pub mod resolve;
pub mod store;

pub use describe::{DescribeSource, FixedDescribeSource, GitDescribeSource};
pub use errors::{Result, VersionError};
pub use info::VersionInfo;
pub use resolve::{version_from_descriptor, ResolvedVersion, VersionResolver};
pub use store::{VersionRecord, VersionStore};
