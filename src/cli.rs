// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

use crate::core::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "resume-builder")]
#[command(about = "Build a fresher resume from a few questions")]
pub struct Cli {
    /// YAML configuration file (defaults to ./config.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the resume is written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Typst executable used to produce the PDF
    #[arg(long)]
    pub typst_bin: Option<String>,

    /// Keep the generated .typ source next to the PDF
    #[arg(long)]
    pub keep_source: bool,

    /// Only write the .typ source, do not compile it
    #[arg(long)]
    pub no_compile: bool,

    /// Show the Projects heading even with no projects
    #[arg(long)]
    pub keep_empty_projects: bool,

    /// Leave blank entries out of bullet lists
    #[arg(long)]
    pub drop_blank_bullets: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags win over file and environment settings. Boolean flags can only
    /// switch a setting on.
    pub fn apply(&self, app: &mut AppConfig) {
        if let Some(dir) = &self.output_dir {
            app.output_dir = dir.clone();
        }
        if let Some(bin) = &self.typst_bin {
            app.typst_bin = bin.clone();
        }
        if self.keep_source {
            app.keep_source = true;
        }
        if self.no_compile {
            app.compile = false;
        }
        if self.keep_empty_projects {
            app.assembly.keep_empty_projects = true;
        }
        if self.drop_blank_bullets {
            app.assembly.drop_blank_bullets = true;
        }
    }
}
