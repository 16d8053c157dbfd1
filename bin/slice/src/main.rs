//! ---
//! slice_section: "03-cli-packaging"
//! slice_subsection: "binary"
//! slice_type: "source"
//! slice_scope: "code"
//! slice_description: "Binary entrypoint for the slice terminal application."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use slice_common::config::AppConfig;
use slice_common::logging::init_tracing;
use slice_versioning::VersionInfo;

mod version;

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "Terminal application that enables slicing for 3d printing in the cloud",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    version: bool,

    #[arg(long, value_name = "FILE", help = "Path to configuration file")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(subcommand, about = "Version inspection and refresh actions")]
    Version(version::VersionCommand),
}

/// Version metadata captured by the build script.
pub(crate) fn build_version_info() -> VersionInfo {
    VersionInfo::new(env!("SLICE_VERSION"), option_env!("SLICE_GIT_DESCRIBE"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", build_version_info().extended());
        return Ok(());
    }
    let config = load_config(cli.config.as_ref())?;
    init_tracing("slice", &config.logging);
    match cli.command {
        Some(Commands::Version(cmd)) => version::run(cmd, &config)?,
        None => {
            Cli::command().print_help()?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    let mut candidates = Vec::new();
    if let Some(path) = path {
        candidates.push(path.clone());
    }
    candidates.push(PathBuf::from("configs/slice.toml"));
    candidates.push(PathBuf::from("configs/slice.dev.toml"));
    AppConfig::load_or_default(&candidates)
}
