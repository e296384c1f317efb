//! Configuration management.
//!
//! Folder settings plus optional saved column rules, loaded from a TOML
//! file. Lookup order: explicit `--config` path, the
//! `PSEUDOBANK_CONFIG_PATH` environment variable, then
//! `<config dir>/pseudobank/config.toml`, then built-in defaults.
//!
//! ```toml
//! input_dir = "sample_data"
//! output_dir = "output"
//! output_prefix = "CLEAN_"
//!
//! [[columns]]
//! column = "Vendor Name"
//! prefix = "Vendor"
//! ```

use crate::models::ColumnRule;
use crate::{Error, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration for pseudobank.
#[derive(Debug, Clone)]
pub struct PseudobankConfig {
    /// Folder searched for relative input paths that do not exist as given.
    pub input_dir: PathBuf,
    /// Folder where sanitized copies are written.
    pub output_dir: PathBuf,
    /// Filename prefix for sanitized copies.
    pub output_prefix: String,
    /// Saved column rules, applied when the command line supplies none.
    pub columns: Vec<ColumnRule>,
}

impl Default for PseudobankConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("sample_data"),
            output_dir: PathBuf::from("output"),
            output_prefix: "CLEAN_".to_string(),
            columns: Vec::new(),
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    /// Input folder.
    input_dir: Option<String>,
    /// Output folder.
    output_dir: Option<String>,
    /// Output filename prefix.
    output_prefix: Option<String>,
    /// Saved column rules.
    #[serde(default)]
    columns: Vec<ColumnRule>,
}

impl PseudobankConfig {
    /// Loads configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: format!("read config '{}'", path.display()),
            cause: e.to_string(),
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| {
            Error::InvalidInput(format!("config '{}' is not valid: {e}", path.display()))
        })?;
        Ok(Self::from_file(file))
    }

    /// Loads configuration from the default location, falling back to
    /// built-in defaults when no config file exists.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring unreadable config file"
                );
                Self::default()
            },
        }
    }

    fn from_file(file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            input_dir: file.input_dir.map_or(defaults.input_dir, PathBuf::from),
            output_dir: file.output_dir.map_or(defaults.output_dir, PathBuf::from),
            output_prefix: file.output_prefix.unwrap_or(defaults.output_prefix),
            columns: file.columns,
        }
    }

    /// Resolves an input argument to a readable path.
    ///
    /// A relative path that does not exist as given is retried under the
    /// configured input folder.
    #[must_use]
    pub fn resolve_input(&self, input: &Path) -> PathBuf {
        if input.is_absolute() || input.exists() {
            return input.to_path_buf();
        }
        self.input_dir.join(input)
    }

    /// Builds the output path for an input file: `<output_dir>/<prefix><name>`.
    #[must_use]
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map_or_else(|| "report.csv".to_string(), |n| n.to_string_lossy().into_owned());
        self.output_dir.join(format!("{}{name}", self.output_prefix))
    }
}

/// Returns the default config file path for this platform.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pseudobank")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
