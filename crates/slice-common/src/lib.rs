//! ---
//! slice_section: "02-configuration-logging"
//! slice_subsection: "module"
//! slice_type: "source"
//! slice_scope: "code"
//! slice_description: "Shared configuration and logging primitives."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
//! Shared primitives for the slice workspace: configuration loading and
//! tracing initialisation consumed by the CLI.

pub mod config;
pub mod logging;

pub use config::{AppConfig, CacheConfig, LoggingConfig, ScmConfig};
pub use logging::{init_tracing, LogFormat};
