//! ---
//! slice_section: "03-cli-packaging"
//! slice_subsection: "binary"
//! slice_type: "source"
//! slice_scope: "code"
//! slice_description: "Version subcommands for the slice terminal application."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use clap::Subcommand;
use slice_common::config::AppConfig;
use slice_versioning::{GitDescribeSource, VersionResolver, VersionStore};
use tracing::{info, warn};

/// Top-level version commands.
#[derive(Debug, Subcommand)]
pub enum VersionCommand {
    /// Print the version embedded at build time.
    Show,
    /// Re-derive the version from the working tree and refresh the artifact.
    Resolve,
}

/// Execute the supplied version command.
pub fn run(command: VersionCommand, config: &AppConfig) -> Result<()> {
    match command {
        VersionCommand::Show => {
            println!("{}", crate::build_version_info().cli_string());
            Ok(())
        }
        VersionCommand::Resolve => resolve(config),
    }
}

fn resolve(config: &AppConfig) -> Result<()> {
    let mut source = GitDescribeSource::new(&config.scm.program);
    if let Some(workdir) = &config.scm.workdir {
        source = source.with_workdir(workdir);
    }
    let store = VersionStore::new(&config.cache.path);
    let resolved = VersionResolver::new(source, store)
        .resolve()
        .with_context(|| {
            format!(
                "unable to resolve a version from {}",
                config.cache.path.display()
            )
        })?;
    match &resolved.descriptor {
        Some(descriptor) => {
            info!(%descriptor, version = %resolved.version, "version refreshed from source control");
        }
        None => {
            warn!(version = %resolved.version, "source control unavailable, reporting cached version");
        }
    }
    println!("{}", resolved.version);
    Ok(())
}
