//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`WORDIFY_*`)
//! 2. Config file (`--config`, `$WORDIFY_CONFIG`, or `./wordify.toml`)
//! 3. Defaults (this file)
//!
//! ## Example `wordify.toml`
//! ```toml
//! default_register = "english"
//! auto_copy = false
//! clipboard_hold_secs = 5
//! log_filter = "debug"
//! ```
//!
//! Configuration is read-only after loading.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordify_core::Register;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "WORDIFY";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "WORDIFY_CONFIG";

/// Optional config file in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "wordify.toml";

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn,wordify=info";

/// Seconds a one-shot copy keeps serving the clipboard on Linux.
pub const DEFAULT_CLIPBOARD_HOLD_SECS: u64 = 10;

/// Which registers to print.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    English,
    Chinese,
    #[default]
    Both,
}

impl Selection {
    /// Registers to render, in display order.
    pub fn registers(self) -> Vec<Register> {
        match self {
            Selection::English => vec![Register::English],
            Selection::Chinese => vec![Register::Chinese],
            Selection::Both => Register::ALL.to_vec(),
        }
    }

    pub fn includes(self, register: Register) -> bool {
        self.registers().contains(&register)
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Registers printed when `--register` is not given.
    pub default_register: Selection,

    /// Copy the result to the clipboard after each successful conversion.
    pub auto_copy: bool,

    /// Copy the ALL CAPS English words rather than the first result.
    pub copy_caps: bool,

    /// How long `convert` keeps clipboard ownership after copying, unless
    /// another owner takes over first. `0` copies without waiting.
    pub clipboard_hold_secs: u64,

    /// `tracing` filter directive; `RUST_LOG` wins over this.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            default_register: Selection::Both,
            auto_copy: true,
            copy_caps: true,
            clipboard_hold_secs: DEFAULT_CLIPBOARD_HOLD_SECS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from the file and the process environment.
    ///
    /// An explicit path (argument or `$WORDIFY_CONFIG`) must exist;
    /// `./wordify.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let file = match explicit {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        Self::from_sources(file, Environment::with_prefix(ENV_PREFIX))
    }

    /// Builds configuration from a file source layered under an environment
    /// source.
    pub fn from_sources<S>(file: S, env: Environment) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = CliConfig::default();
        let config: CliConfig = Config::builder()
            .set_default("default_register", "both")?
            .set_default("auto_copy", defaults.auto_copy)?
            .set_default("copy_caps", defaults.copy_caps)?
            .set_default("clipboard_hold_secs", defaults.clipboard_hold_secs)?
            .set_default("log_filter", defaults.log_filter)?
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn clipboard_hold(&self) -> Duration {
        Duration::from_secs(self.clipboard_hold_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if EnvFilter::try_new(&self.log_filter).is_err() {
            return Err(ConfigError::InvalidValue("log_filter".to_string()));
        }
        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
