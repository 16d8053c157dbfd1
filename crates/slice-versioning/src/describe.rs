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
use std::process::Command;

use tracing::debug;

/// Capability to describe the current source-control state.
///
/// Implementations either produce the raw descriptor text or indicate that no
/// descriptor is available. Unavailability is a normal condition, not an
/// error: the resolver falls back to the cached version record.
pub trait DescribeSource {
    /// Return the descriptor for the current working tree, if one exists.
    fn describe(&self) -> Option<String>;
}

/// Production describe source invoking the `git describe` subcommand.
#[derive(Debug, Clone)]
pub struct GitDescribeSource {
    program: String,
    workdir: Option<PathBuf>,
}

impl GitDescribeSource {
    /// Create a source that invokes the given program with `describe`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            workdir: None,
        }
    }

    /// Run the describe invocation from a specific working directory.
    #[must_use]
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }
}

impl Default for GitDescribeSource {
    fn default() -> Self {
        Self::new("git")
    }
}

impl DescribeSource for GitDescribeSource {
    fn describe(&self) -> Option<String> {
        let mut command = Command::new(&self.program);
        command.arg("describe");
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }
        let output = match command.output() {
            Ok(output) => output,
            Err(err) => {
                debug!(program = %self.program, error = %err, "describe invocation failed");
                return None;
            }
        };
        if !output.status.success() {
            debug!(program = %self.program, status = %output.status, "describe exited with failure");
            return None;
        }
        let text = match String::from_utf8(output.stdout) {
            Ok(text) => text,
            Err(err) => {
                debug!(program = %self.program, error = %err, "describe output was not utf-8");
                return None;
            }
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    }
}

/// Describe source returning a predetermined descriptor, useful for tests
/// and simulation runs without real source-control tooling.
#[derive(Debug, Clone, Default)]
pub struct FixedDescribeSource {
    descriptor: Option<String>,
}

impl FixedDescribeSource {
    /// Construct a source that always yields the given descriptor.
    #[must_use]
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: Some(descriptor.into()),
        }
    }

    /// Construct a source that never yields a descriptor.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { descriptor: None }
    }
}

impl DescribeSource for FixedDescribeSource {
    fn describe(&self) -> Option<String> {
        self.descriptor.clone()
    }
}
