// src/typst_writer.rs
//! Serialize content blocks into a Typst document.
//!
//! User text is always emitted as a Typst string literal (`#"..."`), never as
//! markup, so characters such as `*`, `#` or `=` in a name or description come
//! out verbatim.

use chrono::{Datelike, NaiveDate};

use crate::types::{heading_font, ContentBlock, FontSpec};

const PAGE_MARGIN_PT: u8 = 72;
const RULE_THICKNESS_PT: u8 = 1;

pub struct TypstWriter {
    author: String,
    date: NaiveDate,
}

impl TypstWriter {
    pub fn new(author: &str, date: NaiveDate) -> Self {
        Self {
            author: author.to_string(),
            date,
        }
    }

    pub fn render(&self, blocks: &[ContentBlock]) -> String {
        let mut out = self.preamble();
        for block in blocks {
            out.push_str(&render_block(block));
            out.push_str("\n\n");
        }
        out
    }

    fn preamble(&self) -> String {
        format!(
            "#set document(title: {title}, author: {author}, date: datetime(year: {y}, month: {m}, day: {d}))\n\
             #set page(paper: \"us-letter\", margin: {margin}pt)\n\
             #set text(size: 12pt)\n\n",
            title = string_literal(&format!("{} Resume", self.author)),
            author = string_literal(&self.author),
            y = self.date.year(),
            m = self.date.month(),
            d = self.date.day(),
            margin = PAGE_MARGIN_PT,
        )
    }
}

fn render_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Heading { text, level, color } => styled(text, heading_font(*level, *color)),
        ContentBlock::Text { text, style } => styled(text, style.font()),
        ContentBlock::BulletList { items } => {
            let items: Vec<String> = items
                .iter()
                .map(|item| format!("[#{}]", string_literal(item)))
                .collect();
            format!("#list({})", items.join(", "))
        }
        ContentBlock::Spacer { size } => format!("#v({}pt)", size),
        ContentBlock::Rule => format!(
            "#line(length: 100%, stroke: {}pt + rgb(\"#000000\"))",
            RULE_THICKNESS_PT
        ),
    }
}

fn styled(text: &str, font: FontSpec) -> String {
    format!(
        "#text(size: {}pt, weight: \"{}\", fill: rgb(\"{}\"))[#{}]",
        font.size_pt,
        if font.bold { "bold" } else { "regular" },
        font.color.hex(),
        string_literal(text)
    )
}

/// Quote `value` as a Typst string literal
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
