//! ---
//! slice_section: "02-configuration-logging"
//! slice_subsection: "module"
//! slice_type: "source"
//! slice_scope: "code"
//! slice_description: "Shared configuration and logging primitives."
//! slice_version: "v0.1.0-dev"
//! slice_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

const LOG_ENV: &str = "SLICE_LOG";

/// Available log formats for the CLI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Pretty,
    StructuredJson,
}

/// Initialize the tracing subscriber based on configuration and environment.
///
/// * `SLICE_LOG` overrides the log filter (e.g. `info`, `debug,slice=trace`).
///   When unset the standard `RUST_LOG` variable is honoured, finally
///   defaulting to `info` to keep the CLI quiet by default.
/// * Repeated initialisation is a no-op so subcommands may call this after
///   configuration has been loaded.
pub fn init_tracing(service_name: &str, config: &LoggingConfig) {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid {} directive ({}); defaulting to info logging",
                LOG_ENV, err
            );
            EnvFilter::new("info")
        }),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let fmt_layer = match config.format {
        LogFormat::StructuredJson => fmt::layer().with_target(false).json().boxed(),
        LogFormat::Pretty => fmt::layer().with_target(true).boxed(),
    };

    let initialised = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok();

    if initialised {
        info!(service = %service_name, format = ?config.format, "tracing initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_does_not_panic() {
        init_tracing("slice-test", &LoggingConfig::default());
    }

    #[test]
    fn repeated_init_is_tolerated() {
        init_tracing("slice-test", &LoggingConfig::default());
        init_tracing("slice-test", &LoggingConfig::default());
    }
}
