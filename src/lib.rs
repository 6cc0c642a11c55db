// src/lib.rs
//! Fresher résumé builder.
//!
//! Intake ([`intake`]) produces a [`ResumeRecord`], the core
//! ([`core::assembler`]) turns it into an ordered list of [`ContentBlock`]s,
//! and the generator writes those out as Typst and compiles them to PDF.

pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
pub mod intake;
pub mod types;
pub mod typst_writer;
pub mod utils;
pub mod workspace;

pub use config::ResumeConfig;
pub use crate::core::{assemble, assemble_sections, AssemblyOptions, ConfigManager};
pub use generator::ResumeGenerator;
pub use intake::{collect_record, Intake, PromptIntake};
pub use types::{ContentBlock, ResumeRecord, Section, SectionKind};
