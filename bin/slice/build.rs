//! ---
//! slice_section: "03-cli-packaging"
//! slice_subsection: "binary"
//! slice_type: "source"
//! slice_scope: "build"
//! slice_description: "Build script embedding the resolved package version."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
use std::env;
use std::path::PathBuf;

use slice_versioning::{GitDescribeSource, VersionResolver, VersionStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let source = GitDescribeSource::default().with_workdir(&manifest_dir);
    let store = VersionStore::new(manifest_dir.join("version.json"));
    let resolved = VersionResolver::new(source, store).resolve()?;

    println!("cargo:rustc-env=SLICE_VERSION={}", resolved.version);
    if let Some(descriptor) = resolved.descriptor {
        println!("cargo:rustc-env=SLICE_GIT_DESCRIBE={descriptor}");
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    Ok(())
}
