// src/config.rs
use std::path::PathBuf;

use crate::core::AssemblyOptions;
use crate::utils::resume_file_stem;

pub struct ResumeConfig {
    pub person_name: String,
    pub output_dir: PathBuf,
    pub typst_bin: String,
    pub keep_source: bool,
    pub compile: bool,
    pub assembly: AssemblyOptions,
}

impl ResumeConfig {
    pub fn new(person_name: &str) -> Self {
        Self {
            person_name: person_name.to_string(),
            output_dir: PathBuf::from("."),
            typst_bin: "typst".to_string(),
            keep_source: false,
            compile: true,
            assembly: AssemblyOptions::default(),
        }
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_typst_bin(mut self, bin: String) -> Self {
        self.typst_bin = bin;
        self
    }

    pub fn with_keep_source(mut self, keep: bool) -> Self {
        self.keep_source = keep;
        self
    }

    pub fn with_compile(mut self, compile: bool) -> Self {
        self.compile = compile;
        self
    }

    pub fn with_assembly(mut self, assembly: AssemblyOptions) -> Self {
        self.assembly = assembly;
        self
    }

    pub fn file_stem(&self) -> String {
        resume_file_stem(&self.person_name)
    }

    pub fn source_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.typ", self.file_stem()))
    }

    pub fn pdf_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.pdf", self.file_stem()))
    }
}
