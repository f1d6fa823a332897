//! Diagnostic logging for the eqgen binary.
//!
//! Logging stays off unless `--log <FILTER>` is passed or `EQGEN_LOG` is set.
//! Filters use `EnvFilter` directive syntax:
//!
//! ```bash
//! eqgen --model shop.json --type Customer --log debug --log-format tree
//! EQGEN_LOG=eqgen_synth=trace eqgen --model shop.json --type Point
//! ```
//!
//! Everything is written to stderr; stdout carries only the generated code
//! or report.

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};
use tracing_tree::HierarchicalLayer;

use crate::args::{CliArgs, LogFormat};

const LOG_VAR: &str = "EQGEN_LOG";

/// What to log and how, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// `None` when neither `--log` nor `EQGEN_LOG` asks for output.
    pub fn from_args(args: &CliArgs) -> Option<Self> {
        let filter = args.log.clone().or_else(|| std::env::var(LOG_VAR).ok())?;
        Some(Self {
            filter,
            format: args.log_format,
        })
    }

    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter)
            .with_context(|| format!("invalid log filter '{}'", self.filter))
    }
}

/// Install the global subscriber described by `settings`.
pub fn init_tracing(settings: &LogSettings) -> Result<()> {
    let registry = Registry::default().with(settings.env_filter()?);
    let installed = match settings.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Tree => registry
            .with(HierarchicalLayer::new(2).with_targets(true))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    installed.context("failed to install the log subscriber")
}
