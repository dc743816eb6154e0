// src/config/file.rs
// File-based configuration from ~/.womancart/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{HeroError, Result};

/// Top-level config structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HeroFileConfig {
    #[serde(default)]
    pub generation: GenerationSection,
    #[serde(default)]
    pub server: ServerSection,
}

/// `[generation]` section. Every field is optional; env vars win.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GenerationSection {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub image_size: Option<String>,
    pub poll_interval_ms: Option<u64>,
    pub max_poll_attempts: Option<u32>,
    pub failure_policy: Option<String>,
    pub vision: Option<bool>,
    pub vision_model: Option<String>,
    pub describe_fallback: Option<bool>,
}

/// `[server]` section
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_body_bytes: Option<usize>,
}

impl HeroFileConfig {
    /// Load `path`, or the default location when None.
    ///
    /// A missing default file is not an error; a missing explicit file is.
    /// Parse failures are always errors.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(HeroError::Config(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };

        let config = toml::from_str(&contents)
            .map_err(|e| HeroError::Config(format!("cannot parse {}: {e}", path.display())))?;
        debug!(path = %path.display(), "Loaded config from file");
        Ok(config)
    }

    /// `~/.womancart/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".womancart")
            .join("config.toml")
    }
}
