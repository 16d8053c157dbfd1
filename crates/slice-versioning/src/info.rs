//! ---
//! slice_section: "01-version-resolution"
//! slice_subsection: "module"
//! slice_type: "source"
//! slice_scope: "code"
//! slice_description: "Version derivation and caching for the packaging step."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
use serde::Serialize;

/// Version metadata embedded into the binary at build time.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    /// Resolved package version.
    pub version: String,
    /// Raw source-control descriptor the version was derived from, when the
    /// build environment had one.
    pub descriptor: Option<String>,
}

impl VersionInfo {
    /// Construct version metadata from build-environment strings.
    #[must_use]
    pub fn new(version: impl Into<String>, descriptor: Option<&str>) -> Self {
        Self {
            version: version.into(),
            descriptor: descriptor.map(str::to_owned),
        }
    }

    /// Returns a concise CLI string combining version and descriptor.
    #[must_use]
    pub fn cli_string(&self) -> String {
        match &self.descriptor {
            Some(descriptor) => format!("{} ({})", self.version, descriptor),
            None => self.version.clone(),
        }
    }

    /// Human readable banner used in logging surfaces.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("slice v{}", self.version)
    }

    /// Extended string suitable for `--version` flags.
    #[must_use]
    pub fn extended(&self) -> String {
        format!(
            "{banner}\nDescriptor: {descriptor}",
            banner = self.banner(),
            descriptor = self.descriptor.as_deref().unwrap_or("UNKNOWN")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_contains_version() {
        let info = VersionInfo::new("1.2.3.post4", Some("1.2.3-4-gabc1234"));
        let extended = info.extended();
        assert!(extended.contains("1.2.3.post4"));
        assert!(extended.contains("1.2.3-4-gabc1234"));
    }

    #[test]
    fn cli_string_omits_missing_descriptor() {
        let info = VersionInfo::new("0.1.0", None);
        assert_eq!(info.cli_string(), "0.1.0");
    }
}
