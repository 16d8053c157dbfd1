//! ---
//! slice_section: "02-configuration-logging"
//! slice_subsection: "module"
//! slice_type: "source"
//! slice_scope: "code"
//! slice_description: "Shared configuration and logging primitives."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::logging::LogFormat;

fn default_scm_program() -> String {
    "git".to_owned()
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("version.json")
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

/// Primary configuration object for the slice CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scm: ScmConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub const ENV_CONFIG_PATH: &str = "SLICE_CONFIG";

    /// Load configuration from disk, respecting the `SLICE_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                return Self::from_path(PathBuf::from(env_path));
            }
        }

        for candidate in candidates {
            if candidate.as_ref().exists() {
                return Self::from_path(candidate.as_ref().to_path_buf());
            }
        }

        Err(anyhow!(
            "no configuration files found. inspected: {}",
            candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    /// Load configuration like [`AppConfig::load`], falling back to built-in
    /// defaults when none of the candidates exist.
    pub fn load_or_default<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                return Self::from_path(PathBuf::from(env_path));
            }
        }

        for candidate in candidates {
            if candidate.as_ref().exists() {
                return Self::from_path(candidate.as_ref().to_path_buf());
            }
        }

        debug!("no configuration files found, using defaults");
        Ok(Self::default())
    }

    fn from_path(path: PathBuf) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str::<AppConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        if self.scm.program.trim().is_empty() {
            return Err(anyhow!("scm program cannot be empty"));
        }
        if self.cache.path.as_os_str().is_empty() {
            return Err(anyhow!("cache path cannot be empty"));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scm: ScmConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl std::str::FromStr for AppConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: AppConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

/// Source-control settings used by the version resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScmConfig {
    /// Program providing the `describe` capability.
    #[serde(default = "default_scm_program")]
    pub program: String,
    /// Working directory to describe, defaulting to the current one.
    #[serde(default)]
    pub workdir: Option<PathBuf>,
}

impl Default for ScmConfig {
    fn default() -> Self {
        Self {
            program: default_scm_program(),
            workdir: None,
        }
    }
}

/// Location of the persisted version artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}

/// Logging surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}
