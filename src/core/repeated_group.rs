// src/core/repeated_group.rs
//! Label + bullet breakdown shared by internships and jobs

use crate::core::assembler::AssemblyOptions;
use crate::types::{ContentBlock, Engagement, TextStyle};

/// "<organization> (<role>):"
pub fn engagement_label(engagement: &Engagement) -> String {
    format!("{} ({}):", engagement.organization, engagement.role)
}

/// Render one engagement as its label followed by one bullet per description line.
///
/// With `drop_blank_bullets` unset a blank description still yields a single
/// empty bullet. With it set, blank lines are removed and the list disappears
/// entirely if nothing is left.
pub fn render_engagement(engagement: &Engagement, options: &AssemblyOptions) -> Vec<ContentBlock> {
    let mut blocks = vec![ContentBlock::text(
        engagement_label(engagement),
        TextStyle::Label,
    )];

    let points = options.bullet_items(engagement.description_points());
    if !points.is_empty() {
        blocks.push(ContentBlock::bullets(points));
    }

    blocks
}
