//! Configuration management for fg2gen
//!
//! Provides optional TOML-backed settings for the generator output. Defaults
//! reproduce the stock generator behavior, so the config file is only needed
//! to override them.

use crate::errors::CodegenError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    pub output: OutputConfig,
}

/// Generator output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Width of the dashed separator between accessor groups
    pub separator_width: u32,
    /// Emit implementation bodies instead of prototypes
    pub emit_implementations: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                separator_width: 72,
                emit_implementations: false,
            },
        }
    }
}

impl GenConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CodegenError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            CodegenError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        let config: GenConfig = toml::from_str(&contents).map_err(|e| {
            CodegenError::ConfigError(format!("Failed to parse config file: {}", e))
        })?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CodegenError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CodegenError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| {
            CodegenError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, toml_string).map_err(|e| {
            CodegenError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("fg2gen.toml")
    }

    /// Load from default location or fall back to defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.output.separator_width == 0 || self.output.separator_width > 120 {
            return Err("Separator width must be between 1 and 120".to_string());
        }
        Ok(())
    }
}
