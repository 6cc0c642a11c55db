// src/types/mod.rs
pub mod content;
pub mod resume_record;

pub use content::{heading_font, Color, ContentBlock, FontSpec, Section, SectionKind, TextStyle};
pub use resume_record::{Engagement, Project, ResumeRecord};
