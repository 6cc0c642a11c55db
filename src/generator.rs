// src/generator.rs
use crate::config::ResumeConfig;
use crate::core::assemble_sections;
use crate::types::{ContentBlock, ResumeRecord};
use crate::typst_writer::TypstWriter;
use crate::workspace::OutputWorkspace;
use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing::info;

pub struct ResumeGenerator {
    pub config: ResumeConfig,
}

impl ResumeGenerator {
    pub fn new(config: ResumeConfig) -> Self {
        Self { config }
    }

    /// Typst source for `record`, without touching the file system
    pub fn render_source(&self, record: &ResumeRecord) -> String {
        let sections = assemble_sections(record, &self.config.assembly);
        let kinds: Vec<_> = sections.iter().map(|s| s.kind).collect();
        let blocks: Vec<ContentBlock> = sections.into_iter().flat_map(|s| s.blocks).collect();

        info!(
            "Assembled {} sections ({} blocks): {:?}",
            kinds.len(),
            blocks.len(),
            kinds
        );

        TypstWriter::new(&record.name, Local::now().date_naive()).render(&blocks)
    }

    /// Write the résumé and, when compilation is enabled, turn it into a PDF.
    /// Returns the path of the final artifact.
    pub async fn generate(&self, record: &ResumeRecord) -> Result<PathBuf> {
        let workspace = OutputWorkspace::new(&self.config);
        workspace.prepare().await?;

        let source = self.render_source(record);
        let source_path = workspace.write_source(&source).await?;

        if !self.config.compile {
            info!(
                "Compilation disabled, resume source left at {}",
                source_path.display()
            );
            return Ok(source_path);
        }

        let output_path = workspace.compile().await?;
        workspace.cleanup().await?;

        info!(
            "Successfully generated resume for {} at {}",
            record.name,
            output_path.display()
        );

        Ok(output_path)
    }
}
