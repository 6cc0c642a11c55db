// src/types/content.rs
//! Renderer-agnostic document structure produced by assembly

// ===== Palette =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    DarkBlue,
    Black,
    Blue,
    Green,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Color::DarkBlue => "#00008b",
            Color::Black => "#000000",
            Color::Blue => "#0000ff",
            Color::Green => "#008000",
        }
    }
}

// ===== Text Styles =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Plain paragraph text
    Body,
    /// The "Email | Phone" line under the name
    Contact,
    /// A profile link line, drawn in the given color
    Link(Color),
    /// Bold "<organization> (<role>):" label above a bullet list
    Label,
}

/// Size, weight and color a renderer should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub size_pt: u8,
    pub bold: bool,
    pub color: Color,
}

impl TextStyle {
    pub fn font(self) -> FontSpec {
        match self {
            TextStyle::Body => FontSpec {
                size_pt: 12,
                bold: false,
                color: Color::Black,
            },
            TextStyle::Contact => FontSpec {
                size_pt: 12,
                bold: false,
                color: Color::Black,
            },
            TextStyle::Link(color) => FontSpec {
                size_pt: 12,
                bold: false,
                color,
            },
            TextStyle::Label => FontSpec {
                size_pt: 12,
                bold: true,
                color: Color::Black,
            },
        }
    }
}

/// Heading font by level: 1 is the person's name, anything deeper is a section title.
pub fn heading_font(level: u8, color: Color) -> FontSpec {
    let size_pt = match level {
        1 => 18,
        _ => 14,
    };
    FontSpec {
        size_pt,
        bold: true,
        color,
    }
}

// ===== Content Blocks =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Heading {
        text: String,
        level: u8,
        color: Color,
    },
    Text {
        text: String,
        style: TextStyle,
    },
    BulletList {
        items: Vec<String>,
    },
    /// Vertical gap in points
    Spacer {
        size: u8,
    },
    /// Full-width horizontal divider
    Rule,
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>, level: u8, color: Color) -> Self {
        ContentBlock::Heading {
            text: text.into(),
            level,
            color,
        }
    }

    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        ContentBlock::Text {
            text: text.into(),
            style,
        }
    }

    pub fn bullets(items: Vec<String>) -> Self {
        ContentBlock::BulletList { items }
    }

    pub fn spacer(size: u8) -> Self {
        ContentBlock::Spacer { size }
    }
}

// ===== Sections =====

/// The fixed set of résumé sections, declared in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SectionKind {
    Header,
    Objective,
    Skills,
    Education,
    Projects,
    Internships,
    WorkExperience,
    Certifications,
}

impl SectionKind {
    /// Printed heading; `None` for the header, whose heading is the person's name.
    pub fn title(self) -> Option<&'static str> {
        match self {
            SectionKind::Header => None,
            SectionKind::Objective => Some("OBJECTIVE"),
            SectionKind::Skills => Some("SKILLS"),
            SectionKind::Education => Some("EDUCATION"),
            SectionKind::Projects => Some("PROJECTS"),
            SectionKind::Internships => Some("INTERNSHIPS"),
            SectionKind::WorkExperience => Some("WORK EXPERIENCE"),
            SectionKind::Certifications => Some("CERTIFICATIONS"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<ContentBlock>,
}
