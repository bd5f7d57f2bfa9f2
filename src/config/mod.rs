//! Asset configuration management for `faviconize.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── background # [background]
//! │   ├── crop       # [crop]
//! │   └── output     # [output]
//! ├── error          # ConfigError, ConfigDiagnostics
//! ├── util           # config lookup, path resolution
//! └── mod.rs         # AssetConfig (this file)
//! ```
//!
//! The config file is optional. Without one every value falls back to the
//! built-in defaults, and CLI flags always win over file values.

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{BackgroundMode, OutputConfig};

use section::{BackgroundConfig, CropConfig};

use crate::{
    cli::{Cli, GenerateArgs},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{find_config_file, resolve_path};

/// File name searched for when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "faviconize.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing faviconize.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Path of the loaded config file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative config paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Background stripping
    pub background: BackgroundConfig,

    /// Crop-to-content
    pub crop: CropConfig,

    /// Output files
    pub output: OutputConfig,
}

impl AssetConfig {
    /// Load configuration for the generate command.
    ///
    /// An explicit `--config` must exist. Otherwise `faviconize.toml` is
    /// searched upward from the current directory and defaults are used when
    /// none is found.
    pub fn load(cli: &Cli, args: &GenerateArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match Self::resolve_config_path(cli, &cwd)? {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => Self {
                root: cwd.clone(),
                ..Self::default()
            },
        };

        config.normalize_paths();
        config.apply_generate_args(args, &cwd);
        config.validate()?;

        if let Some(path) = &config.config_path {
            debug!("config"; "loaded {}", path.display());
        }
        Ok(config)
    }

    /// Resolve the config file to read, if any.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> Result<Option<PathBuf>> {
        match &cli.config {
            Some(path) => {
                let path = resolve_path(path, cwd);
                if path.is_file() {
                    Ok(Some(path))
                } else {
                    Err(ConfigError::NotFound(path).into())
                }
            }
            None => Ok(find_config_file(cwd, Path::new(DEFAULT_CONFIG_NAME))),
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply generate arguments from CLI.
    ///
    /// CLI paths resolve against the working directory, not the config root.
    fn apply_generate_args(&mut self, args: &GenerateArgs, cwd: &Path) {
        Self::update_option(&mut self.background.tolerance, args.tolerance.as_ref());
        Self::update_option(&mut self.background.mode, args.mode.as_ref());

        if args.keep_background {
            self.background.enable = false;
            self.crop.enable = false;
        }
        if args.no_crop {
            self.crop.enable = false;
        }

        if let Some(dir) = &args.output {
            self.output.dir = resolve_path(dir, cwd);
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve the output directory against the config root.
    fn normalize_paths(&mut self) {
        self.output.dir = resolve_path(&self.output.dir, &self.root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.output.validate(&mut diag);
        diag.into_result()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AssetConfig {
    let (parsed, ignored) = AssetConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
