//! ---
//! slice_section: "01-version-resolution"
//! slice_subsection: "module"
//! slice_type: "source"
//! slice_scope: "code"
//! slice_description: "Version derivation and caching for the packaging step."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::describe::DescribeSource;
use crate::errors::Result;
use crate::store::{VersionRecord, VersionStore};

// Release descriptors look like `1.2.3-4-gabc1234`: a dot/digit tag, the
// commit offset since that tag, then an eight-word-character object id.
static DESCRIPTOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<tag>[\d.]+)-(?P<offset>\d+)-(?P<sha>\w{8})")
        .expect("descriptor pattern compiles")
});

/// Derive a version string from a raw source-control descriptor.
///
/// Descriptors matching the release pattern become `<tag>.post<offset>`;
/// anything else passes through unchanged and is used verbatim.
#[must_use]
pub fn version_from_descriptor(descriptor: &str) -> String {
    match DESCRIPTOR_PATTERN.captures(descriptor) {
        Some(captures) => format!("{}.post{}", &captures["tag"], &captures["offset"]),
        None => descriptor.to_owned(),
    }
}

/// Outcome of a resolver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Version string loaded back from the artifact store.
    pub version: String,
    /// Raw descriptor, when source-control state was available.
    pub descriptor: Option<String>,
}

/// Resolves the package version, preferring live source-control state over
/// the cached artifact and never failing just because the tool is absent.
#[derive(Debug, Clone)]
pub struct VersionResolver<S> {
    source: S,
    store: VersionStore,
}

impl<S: DescribeSource> VersionResolver<S> {
    /// Build a resolver from a describe capability and an artifact store.
    #[must_use]
    pub fn new(source: S, store: VersionStore) -> Self {
        Self { source, store }
    }

    /// Access the underlying artifact store.
    #[must_use]
    pub fn store(&self) -> &VersionStore {
        &self.store
    }

    /// Query the describe source, refresh the artifact when a descriptor was
    /// obtained, then load and return whatever the artifact now holds.
    ///
    /// The load happens unconditionally so the packaging step always sees a
    /// value as long as the artifact was seeded at least once.
    pub fn resolve(&self) -> Result<ResolvedVersion> {
        let descriptor = self.source.describe();
        match &descriptor {
            Some(raw) => {
                let version = version_from_descriptor(raw);
                self.store.save(&VersionRecord::new(version))?;
            }
            None => {
                debug!(path = %self.store.path().display(), "no descriptor available, keeping cached version");
            }
        }
        let record = self.store.load()?;
        Ok(ResolvedVersion {
            version: record.version,
            descriptor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::FixedDescribeSource;
    use crate::errors::VersionError;

    #[test]
    fn release_descriptor_becomes_post_version() {
        assert_eq!(version_from_descriptor("1.2.3-4-abcdef12"), "1.2.3.post4");
    }

    #[test]
    fn git_style_descriptor_becomes_post_version() {
        // `git describe` prefixes the object id with `g`; the id segment is
        // still eight word characters.
        assert_eq!(version_from_descriptor("0.6.0-12-gabcdef1"), "0.6.0.post12");
    }

    #[test]
    fn bare_sha_passes_through() {
        assert_eq!(version_from_descriptor("abcdef1"), "abcdef1");
    }

    #[test]
    fn plain_tag_passes_through() {
        assert_eq!(version_from_descriptor("1.2.3"), "1.2.3");
    }

    #[test]
    fn pattern_must_anchor_at_start() {
        assert_eq!(
            version_from_descriptor("v1.2.3-4-abcdef12"),
            "v1.2.3-4-abcdef12"
        );
    }

    #[test]
    fn digitless_tag_still_computes() {
        // The tag class admits bare dots; no stricter validation is applied.
        assert_eq!(version_from_descriptor("..-7-abcdef12"), "...post7");
    }

    #[test]
    fn fresh_descriptor_refreshes_the_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = VersionStore::new(dir.path().join("version.json"));
        store
            .save(&VersionRecord::new("0.0.1"))
            .expect("seed artifact");
        let resolver =
            VersionResolver::new(FixedDescribeSource::new("1.2.3-4-abcdef12"), store.clone());
        let resolved = resolver.resolve().expect("resolve succeeds");
        assert_eq!(resolved.version, "1.2.3.post4");
        assert_eq!(resolved.descriptor.as_deref(), Some("1.2.3-4-abcdef12"));
        assert_eq!(store.load().expect("load succeeds").version, "1.2.3.post4");
    }

    #[test]
    fn unavailable_descriptor_falls_back_to_cache() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = VersionStore::new(dir.path().join("version.json"));
        store
            .save(&VersionRecord::new("0.0.1"))
            .expect("seed artifact");
        let resolver = VersionResolver::new(FixedDescribeSource::unavailable(), store);
        let resolved = resolver.resolve().expect("resolve succeeds");
        assert_eq!(resolved.version, "0.0.1");
        assert_eq!(resolved.descriptor, None);
    }

    #[test]
    fn unavailable_descriptor_with_no_cache_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = VersionStore::new(dir.path().join("version.json"));
        let resolver = VersionResolver::new(FixedDescribeSource::unavailable(), store);
        let err = resolver.resolve().expect_err("resolve should fail");
        assert!(matches!(err, VersionError::Missing(_)));
    }
}
