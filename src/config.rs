//! Build configuration.
//!
//! Loaded from `config.toml` in the themes directory. Stock defaults are the
//! base layer; the user file only needs the keys it changes.
//!
//! ```text
//! themes/
//! ├── config.toml          # optional
//! ├── 010-classic.scss
//! ├── 020-ocean.scss
//! └── draft-neon.css       # unnumbered: compiled only when named
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [compile]
//! include = []              # Theme names in order (empty = all numbered themes)
//! output = "themes.css"     # Stylesheet written by `site-theme compile`
//! header_comments = true    # Write /* theme: name */ before each theme
//!
//! [preview]
//! title = "Theme preview"   # <title> of the preview page
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// How themes are concatenated into one stylesheet.
    pub compile: CompileConfig,
    /// Preview page settings.
    pub preview: PreviewConfig,
}

impl BuildConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let output = self.compile.output.trim();
        if output.is_empty() {
            return Err(ConfigError::Validation(
                "compile.output must not be empty".into(),
            ));
        }
        if !output.ends_with(".css") {
            return Err(ConfigError::Validation(format!(
                "compile.output must be a .css file, got '{}'",
                output
            )));
        }
        if self.compile.include.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "compile.include must not contain empty names".into(),
            ));
        }
        if self.preview.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "preview.title must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Theme concatenation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    /// Theme names to compile, in order. Empty means every numbered theme
    /// in catalog order.
    pub include: Vec<String>,
    /// Output stylesheet path, relative to the working directory.
    pub output: String,
    /// Precede each theme with a `/* theme: name */` comment.
    pub header_comments: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            output: "themes.css".to_string(),
            header_comments: true,
        }
    }
}

/// Preview page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Title of the generated preview page.
    pub title: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            title: "Theme preview".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(BuildConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` when the directory has no config file.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<BuildConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: BuildConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the build config for a themes directory.
pub fn load_config(themes_dir: &Path) -> Result<BuildConfig, ConfigError> {
    let overlay = load_raw_config(themes_dir)?;
    if overlay.is_some() {
        tracing::debug!(dir = %themes_dir.display(), "loaded {}", CONFIG_FILE);
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Theme Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the themes directory next to the theme files.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Compile: concatenate themes into one stylesheet
# ---------------------------------------------------------------------------
[compile]
# Theme names to include, in order. Names match the file stem with or
# without its number prefix: "ocean" and "020-ocean" both find 020-ocean.scss.
# Leave empty to include every numbered theme in number order.
include = []

# Stylesheet written by `site-theme compile`.
output = "themes.css"

# Write a /* theme: name */ comment before each theme's block.
header_comments = true

# ---------------------------------------------------------------------------
# Preview page
# ---------------------------------------------------------------------------
[preview]
title = "Theme preview"
"##
}
