// src/core/config_manager.rs
//! Layered configuration: defaults, optional YAML file, then environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ResumeConfig;
use crate::core::AssemblyOptions;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub typst_bin: String,
    pub keep_source: bool,
    pub compile: bool,
    pub log_file: PathBuf,
    pub assembly: AssemblyOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            typst_bin: "typst".to_string(),
            keep_source: false,
            compile: true,
            log_file: PathBuf::from("/tmp/resume_builder.log"),
            assembly: AssemblyOptions::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub app: AppConfig,
}

impl ConfigManager {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `config.yaml` in the current
    /// directory is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut app = match path {
            Some(path) => Self::load_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_file(&default_path)?
                } else {
                    AppConfig::default()
                }
            }
        };

        Self::apply_env_overrides(&mut app);
        Ok(Self { app })
    }

    fn load_file(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let app = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(app)
    }

    pub fn parse(content: &str) -> Result<AppConfig> {
        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }
        serde_yaml::from_str(content).context("Invalid configuration YAML")
    }

    fn apply_env_overrides(app: &mut AppConfig) {
        if let Ok(dir) = std::env::var("RESUME_OUTPUT_DIR") {
            if !dir.is_empty() {
                app.output_dir = PathBuf::from(dir);
            }
        }
        if let Ok(bin) = std::env::var("TYPST_BIN") {
            if !bin.is_empty() {
                app.typst_bin = bin;
            }
        }
    }

    /// Per-run configuration for one person's résumé
    pub fn create_resume_config(&self, person_name: &str) -> ResumeConfig {
        ResumeConfig::new(person_name)
            .with_output_dir(self.app.output_dir.clone())
            .with_typst_bin(self.app.typst_bin.clone())
            .with_keep_source(self.app.keep_source)
            .with_compile(self.app.compile)
            .with_assembly(self.app.assembly.clone())
    }
}
