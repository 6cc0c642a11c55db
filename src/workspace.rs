// src/workspace.rs
use crate::config::ResumeConfig;
use crate::core::FsOps;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Owns the files written for one résumé: the Typst source and the compiled PDF.
pub struct OutputWorkspace<'a> {
    config: &'a ResumeConfig,
}

impl<'a> OutputWorkspace<'a> {
    pub fn new(config: &'a ResumeConfig) -> Self {
        Self { config }
    }

    pub async fn prepare(&self) -> Result<()> {
        FsOps::ensure_dir_exists(&self.config.output_dir)
            .await
            .context("Failed to create output directory")
    }

    pub async fn write_source(&self, source: &str) -> Result<PathBuf> {
        let path = self.config.source_path();
        FsOps::write_file_safe(&path, source)
            .await
            .context("Failed to write resume source")?;
        Ok(path)
    }

    pub async fn compile(&self) -> Result<PathBuf> {
        let source_path = self.config.source_path();
        let output_path = self.config.pdf_path();

        debug!(
            "Running {} compile {} {}",
            self.config.typst_bin,
            source_path.display(),
            output_path.display()
        );

        let output = Command::new(&self.config.typst_bin)
            .arg("compile")
            .arg(&source_path)
            .arg(&output_path)
            .output()
            .await
            .with_context(|| format!("Failed to execute {} command", self.config.typst_bin))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            anyhow::bail!(
                "Typst compilation failed: stderr={}, stdout={}",
                stderr,
                stdout
            );
        }

        info!("Compiled {}", output_path.display());
        Ok(output_path)
    }

    /// Drop the intermediate source unless asked to keep it
    pub async fn cleanup(&self) -> Result<()> {
        if self.config.keep_source {
            return Ok(());
        }

        if let Err(e) = FsOps::remove_file_if_exists(&self.config.source_path()).await {
            warn!("Failed to remove resume source: {}", e);
        }
        Ok(())
    }
}
