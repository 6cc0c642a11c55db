// src/core/mod.rs
//! Content assembly plus the file helpers the renderer leans on

pub mod assembler;
pub mod config_manager;
pub mod fs_ops;
pub mod repeated_group;

pub use assembler::{assemble, assemble_sections, AssemblyOptions};
pub use config_manager::{AppConfig, ConfigManager};
pub use fs_ops::FsOps;
pub use repeated_group::render_engagement;
