//! config
//!
//! Settings resolution from config file, environment, and flags.
//!
//! # Precedence
//!
//! Every setting resolves from, in ascending precedence (later overrides
//! earlier):
//!
//! 1. Built-in defaults
//! 2. Config file
//! 3. Environment variables
//! 4. CLI flags explicitly set by the user
//!
//! Flags carry no parser-level defaults: an unset flag is `None` and never
//! shadows a value from a lower-precedence source.
//!
//! # Config File
//!
//! A YAML mapping, read from `--config <path>` if given, otherwise from
//! `~/.grafanactl.yaml`. An explicitly-named file that is missing or
//! malformed is an error; an absent default file is not. Recognized keys are
//! `url`, `apiKey`, `verbosity`, and `output`; unrecognized keys are
//! ignored.
//!
//! # Environment Variables
//!
//! Each setting key, uppercased: `URL`, `APIKEY`, `VERBOSITY`, `OUTPUT`.
//!
//! # Example
//!
//! ```no_run
//! use grafanactl::config::{FlagOverrides, Settings};
//!
//! let flags = FlagOverrides {
//!     url: Some("https://grafana.example.com".to_string()),
//!     ..Default::default()
//! };
//! let settings = Settings::resolve(&flags).unwrap();
//! assert_eq!(settings.url, "https://grafana.example.com");
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::render::{OutputFormat, UnsupportedFormatError};

/// File name of the default config file, relative to the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".grafanactl.yaml";

/// Errors from settings resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),
}

/// Log verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Debug => write!(f, "debug"),
            Verbosity::Info => write!(f, "info"),
            Verbosity::Warn => write!(f, "warn"),
            Verbosity::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Verbosity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Verbosity::Debug),
            "info" => Ok(Verbosity::Info),
            "warn" => Ok(Verbosity::Warn),
            "error" => Ok(Verbosity::Error),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown verbosity {:?} (expected debug, info, warn, or error)",
                other
            ))),
        }
    }
}

/// Config file schema.
///
/// All keys are optional; a missing key leaves the lower-precedence value in
/// effect.
///
/// # Example
///
/// ```yaml
/// url: https://grafana.example.com
/// apiKey: eyJrIjoi...
/// verbosity: info
/// output: table
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileConfig {
    /// Grafana endpoint URL
    pub url: Option<String>,

    /// Grafana API key
    pub api_key: Option<String>,

    /// Log level (debug, info, warn, error)
    pub verbosity: Option<String>,

    /// Output format (table, json)
    pub output: Option<String>,
}

/// Environment variable source.
///
/// Holds a snapshot of the recognized variables so resolution can be tested
/// without mutating process-global state.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Environment variable names recognized during resolution.
    pub const KEYS: [&'static str; 4] = ["URL", "APIKEY", "VERBOSITY", "OUTPUT"];

    /// Snapshot the recognized variables from the process environment.
    pub fn process() -> Self {
        let vars = Self::KEYS
            .iter()
            .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)))
            .collect();
        Self { vars }
    }

    /// An empty source (no variables set).
    pub fn empty() -> Self {
        Self::default()
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl FromIterator<(&'static str, &'static str)> for EnvSource {
    fn from_iter<I: IntoIterator<Item = (&'static str, &'static str)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Flags the user explicitly set.
///
/// `None` means the flag was not given on the command line; such flags never
/// override lower-precedence sources.
#[derive(Debug, Clone, Default)]
pub struct FlagOverrides {
    /// `--config <path>`
    pub config: Option<PathBuf>,

    /// `--url <endpoint>`
    pub url: Option<String>,

    /// `--key <credential>`
    pub key: Option<String>,

    /// `--verbosity <level>`
    pub verbosity: Option<String>,

    /// `--output <format>`
    pub output: Option<String>,
}

/// Fully-resolved settings.
///
/// Exactly one effective value per field; never partially resolved.
/// `url` and `api_key` default to the empty string - their absence surfaces
/// as a client-construction error, not a resolution error.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Grafana endpoint URL
    pub url: String,

    /// Grafana API key
    pub api_key: String,

    /// Log verbosity
    pub verbosity: Verbosity,

    /// Output format for list/get commands
    pub output: OutputFormat,

    /// Config file the settings were loaded from, if any
    pub config_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            verbosity: Verbosity::default(),
            output: OutputFormat::default(),
            config_file: None,
        }
    }
}

impl Settings {
    /// Resolve settings from the config file, process environment, and the
    /// given flag overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly-named config file cannot be read or
    /// parsed, or if a resolved verbosity or output value is unrecognized.
    /// An absent default config file is not an error.
    pub fn resolve(flags: &FlagOverrides) -> Result<Settings, ConfigError> {
        let (file, path) = load_file_config(flags.config.as_deref())?;
        Self::resolve_from(file, path, &EnvSource::process(), flags)
    }

    /// Resolve settings from already-loaded sources.
    ///
    /// This is the precedence core; [`resolve`](Self::resolve) is the
    /// convenience wrapper over the real file and environment.
    pub fn resolve_from(
        file: Option<FileConfig>,
        config_file: Option<PathBuf>,
        env: &EnvSource,
        flags: &FlagOverrides,
    ) -> Result<Settings, ConfigError> {
        let file = file.unwrap_or_default();

        let url = overlay(file.url, env.get("URL"), flags.url.as_ref());
        let api_key = overlay(file.api_key, env.get("APIKEY"), flags.key.as_ref());
        let verbosity = overlay(file.verbosity, env.get("VERBOSITY"), flags.verbosity.as_ref());
        let output = overlay(file.output, env.get("OUTPUT"), flags.output.as_ref());

        let verbosity = match verbosity {
            Some(level) => level.parse()?,
            None => Verbosity::default(),
        };
        let output = match output {
            Some(format) => format.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        Ok(Settings {
            url: url.unwrap_or_default(),
            api_key: api_key.unwrap_or_default(),
            verbosity,
            output,
            config_file,
        })
    }
}

/// Overlay one setting across its three explicit sources.
fn overlay(file: Option<String>, env: Option<&str>, flag: Option<&String>) -> Option<String> {
    flag.cloned().or_else(|| env.map(str::to_string)).or(file)
}

/// Load the config file.
///
/// With an explicit path, the file must exist and parse. Without one, the
/// default file in the home directory is used if present; a missing default
/// file (or an undiscoverable home directory) yields no file config.
fn load_file_config(
    explicit: Option<&Path>,
) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let Some(home) = dirs::home_dir() else {
                return Ok((None, None));
            };
            let path = home.join(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok((None, None));
            }
            path
        }
    };

    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;

    let config = serde_yaml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok((Some(config), Some(path)))
}
