//! Configuration for sundialr with validation and default generation.
//!
//! Loads `sundialr.toml` from `XDG_CONFIG_HOME/sundialr/` (or an explicit
//! `--config` directory), creating a commented default file on first run.
//! Every field is optional; accessors supply the defaults so the rest of the
//! crate never sees an `Option`.
//!
//! ```toml
//! location = "Tromsø, Norway"   # Display name for the dial title
//! times_file = "suntimes.json"  # Cached provider record to render from
//! output_path = "sundial.jpg"   # Where the rendered JPEG lands
//! jpeg_quality = 90             # JPEG encode quality (1-100)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

use crate::constants::{DEFAULT_JPEG_QUALITY, DEFAULT_LOCATION, DEFAULT_OUTPUT_PATH};

/// Template written on first run so users have a commented starting point.
const DEFAULT_CONFIG: &str = r#"#[Sundialr config]
#location = "Tromsø, Norway"   # Display name for the dial title
#times_file = "suntimes.json"  # Cached provider record to render from
#output_path = "sundial.jpg"   # Where the rendered JPEG lands
#jpeg_quality = 90             # JPEG encode quality (1-100)
"#;

/// Application settings, loaded from `sundialr.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Display name for the dial title.
    pub location: Option<String>,
    /// Path to the cached sun/moon times record (JSON).
    pub times_file: Option<String>,
    /// Destination path for the rendered JPEG.
    pub output_path: Option<String>,
    /// JPEG encode quality, 1-100.
    pub jpeg_quality: Option<u8>,
}

impl Config {
    /// Load configuration, creating a default file if none exists.
    ///
    /// `config_dir` overrides the XDG search path (the `--config` flag).
    pub fn load(config_dir: Option<&str>) -> Result<Self> {
        let path = Self::config_path(config_dir)?;

        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory {parent:?}"))?;
            }
            fs::write(&path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write default config to {path:?}"))?;
            log_pipe!();
            log_info!("Created default configuration at {}", path.display());
        }

        Self::load_from_path(&path)
    }

    /// Load and validate a specific config file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path:?}"))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Invalid TOML in config file {path:?}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file location: explicit directory, then
    /// `XDG_CONFIG_HOME/sundialr/sundialr.toml`.
    pub fn config_path(config_dir: Option<&str>) -> Result<PathBuf> {
        let dir = match config_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("sundialr"),
        };
        Ok(dir.join("sundialr.toml"))
    }

    fn validate(&self) -> Result<()> {
        if let Some(quality) = self.jpeg_quality {
            if !(1..=100).contains(&quality) {
                bail!("jpeg_quality must be between 1 and 100, got {quality}");
            }
        }
        if let Some(location) = &self.location {
            if location.trim().is_empty() {
                bail!("location must not be empty when set");
            }
        }
        Ok(())
    }

    // # Accessors with defaults

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or(DEFAULT_LOCATION)
    }

    pub fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality.unwrap_or(DEFAULT_JPEG_QUALITY)
    }

    /// Log the effective configuration the way the startup block displays it.
    pub fn log_summary(&self) {
        log_block_start!("Loaded configuration");
        log_indented!("Location: {}", self.location());
        log_indented!(
            "Times file: {}",
            self.times_file.as_deref().unwrap_or("(from --times-file)")
        );
        log_indented!("Output: {}", self.output_path());
        log_indented!("JPEG quality: {}", self.jpeg_quality());
    }
}
