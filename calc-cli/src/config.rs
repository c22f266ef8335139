//! On-disk configuration for the `calc` binary.
//!
//! ```toml
//! log_filter = "info,calc_core=debug"
//! log_file = "calc.log"
//! show_state = true
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Log filter used when neither `RUST_LOG`, `--log-level`, nor the
/// configuration file names one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// `EnvFilter` directive, e.g. `"debug"` or `"warn,calc_core=trace"`.
    pub log_filter: String,

    /// Append log records to this file in addition to stderr.
    pub log_file: Option<PathBuf>,

    /// Print the whole state after each run instead of just the display.
    pub show_state: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            show_state: false,
        }
    }
}

impl CalcConfig {
    /// Picks the log filter: `--log-level` wins over the file's
    /// `log_filter`. `RUST_LOG` is checked later, when logging starts.
    pub fn effective_filter<'a>(
        &'a self,
        cli: Option<&'a str>,
    ) -> &'a str {
        cli.unwrap_or(self.log_filter.as_str())
    }

    /// Loads the configuration from `path`, or the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
