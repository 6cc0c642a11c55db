// src/core/fs_ops.rs
//! File system operations used while writing a résumé out

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

pub struct FsOps;

impl FsOps {
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Write a file, creating its parent directory first
    pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                Self::ensure_dir_exists(parent).await?;
            }
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        info!("Written file: {}", path.display());
        Ok(())
    }

    pub async fn remove_file_if_exists(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .await
                .with_context(|| format!("Failed to remove file: {}", path.display()))?;
            debug!("Removed file: {}", path.display());
        }
        Ok(())
    }
}
