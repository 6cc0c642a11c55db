// src/core/assembler.rs
//! Section assembly: decides which sections appear, in which order, with which blocks

use serde::Deserialize;
use tracing::debug;

use crate::core::repeated_group::render_engagement;
use crate::types::{Color, ContentBlock, Engagement, ResumeRecord, Section, SectionKind, TextStyle};

const HEADING_GAP: u8 = 6;
const ENTRY_GAP: u8 = 6;
const SECTION_GAP: u8 = 12;

/// Policy switches for the two cases where the layout is a matter of choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssemblyOptions {
    /// Emit the Projects heading even when there are no projects
    pub keep_empty_projects: bool,
    /// Remove blank items from every bullet list
    pub drop_blank_bullets: bool,
}

impl AssemblyOptions {
    pub(crate) fn bullet_items(&self, items: Vec<String>) -> Vec<String> {
        if self.drop_blank_bullets {
            items.into_iter().filter(|item| !item.trim().is_empty()).collect()
        } else {
            items
        }
    }
}

/// Build every section of the résumé, skipping the optional ones that have no content.
pub fn assemble_sections(record: &ResumeRecord, options: &AssemblyOptions) -> Vec<Section> {
    let mut sections = vec![
        header_section(record),
        section(
            SectionKind::Objective,
            vec![ContentBlock::text(&record.objective, TextStyle::Body)],
        ),
        skills_section(record, options),
        section(
            SectionKind::Education,
            vec![ContentBlock::text(&record.education, TextStyle::Body)],
        ),
    ];

    if !record.projects.is_empty() || options.keep_empty_projects {
        let body = record
            .projects
            .iter()
            .flat_map(|project| {
                [
                    ContentBlock::text(
                        format!("{}: {}", project.title, project.description),
                        TextStyle::Body,
                    ),
                    ContentBlock::spacer(ENTRY_GAP),
                ]
            })
            .collect();
        sections.push(section(SectionKind::Projects, body));
    }

    if !record.internships.is_empty() {
        sections.push(engagement_section(
            SectionKind::Internships,
            &record.internships,
            options,
        ));
    }

    if !record.jobs.is_empty() {
        sections.push(engagement_section(
            SectionKind::WorkExperience,
            &record.jobs,
            options,
        ));
    }

    if !record.certifications.is_empty() {
        let items = options.bullet_items(record.certifications.clone());
        let body = if items.is_empty() {
            Vec::new()
        } else {
            vec![ContentBlock::bullets(items)]
        };
        sections.push(section(SectionKind::Certifications, body));
    }

    sections
}

/// Flatten the sections into the block sequence a renderer consumes.
pub fn assemble(record: &ResumeRecord, options: &AssemblyOptions) -> Vec<ContentBlock> {
    let sections = assemble_sections(record, options);
    let blocks: Vec<ContentBlock> = sections
        .into_iter()
        .flat_map(|section| section.blocks)
        .collect();

    debug!("Assembled {} content blocks for {}", blocks.len(), record.name);
    blocks
}

fn header_section(record: &ResumeRecord) -> Section {
    let mut blocks = vec![
        ContentBlock::heading(&record.name, 1, Color::DarkBlue),
        ContentBlock::spacer(HEADING_GAP),
        ContentBlock::text(
            format!("Email: {} | Phone: {}", record.email, record.phone),
            TextStyle::Contact,
        ),
    ];

    if record.has_linkedin() {
        blocks.push(ContentBlock::text(
            format!("LinkedIn: {}", record.linkedin),
            TextStyle::Link(Color::Blue),
        ));
    }
    if record.has_github() {
        blocks.push(ContentBlock::text(
            format!("GitHub: {}", record.github),
            TextStyle::Link(Color::Green),
        ));
    }

    blocks.push(ContentBlock::spacer(SECTION_GAP));
    blocks.push(ContentBlock::Rule);

    Section {
        kind: SectionKind::Header,
        blocks,
    }
}

fn skills_section(record: &ResumeRecord, options: &AssemblyOptions) -> Section {
    let items = options.bullet_items(record.skill_tokens());
    let body = if items.is_empty() {
        Vec::new()
    } else {
        vec![ContentBlock::bullets(items)]
    };
    section(SectionKind::Skills, body)
}

fn engagement_section(
    kind: SectionKind,
    engagements: &[Engagement],
    options: &AssemblyOptions,
) -> Section {
    let body = engagements
        .iter()
        .flat_map(|engagement| {
            let mut blocks = render_engagement(engagement, options);
            blocks.push(ContentBlock::spacer(ENTRY_GAP));
            blocks
        })
        .collect();
    section(kind, body)
}

/// Wrap a body with the section's heading and trailing gap.
fn section(kind: SectionKind, body: Vec<ContentBlock>) -> Section {
    let mut blocks = Vec::with_capacity(body.len() + 3);
    if let Some(title) = kind.title() {
        blocks.push(ContentBlock::heading(title, 2, Color::DarkBlue));
        blocks.push(ContentBlock::spacer(HEADING_GAP));
    }
    blocks.extend(body);
    blocks.push(ContentBlock::spacer(SECTION_GAP));

    Section { kind, blocks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Project;

    fn jane() -> ResumeRecord {
        ResumeRecord {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-0100".to_string(),
            linkedin: String::new(),
            github: String::new(),
            objective: "Entry-level engineer".to_string(),
            skills: "Go, SQL".to_string(),
            education: "B.S. CS".to_string(),
            projects: vec![Project::new("Tracker", "Built a tracker app")],
            internships: Vec::new(),
            jobs: Vec::new(),
            certifications: Vec::new(),
        }
    }

    fn kinds(sections: &[Section]) -> Vec<SectionKind> {
        sections.iter().map(|s| s.kind).collect()
    }

    fn headings(blocks: &[ContentBlock]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Heading { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn texts(blocks: &[ContentBlock]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_minimal_record_block_sequence() {
        let blocks = assemble(&jane(), &AssemblyOptions::default());

        let expected = vec![
            ContentBlock::heading("Jane Doe", 1, Color::DarkBlue),
            ContentBlock::spacer(6),
            ContentBlock::text("Email: jane@x.com | Phone: 555-0100", TextStyle::Contact),
            ContentBlock::spacer(12),
            ContentBlock::Rule,
            ContentBlock::heading("OBJECTIVE", 2, Color::DarkBlue),
            ContentBlock::spacer(6),
            ContentBlock::text("Entry-level engineer", TextStyle::Body),
            ContentBlock::spacer(12),
            ContentBlock::heading("SKILLS", 2, Color::DarkBlue),
            ContentBlock::spacer(6),
            ContentBlock::bullets(vec!["Go".to_string(), "SQL".to_string()]),
            ContentBlock::spacer(12),
            ContentBlock::heading("EDUCATION", 2, Color::DarkBlue),
            ContentBlock::spacer(6),
            ContentBlock::text("B.S. CS", TextStyle::Body),
            ContentBlock::spacer(12),
            ContentBlock::heading("PROJECTS", 2, Color::DarkBlue),
            ContentBlock::spacer(6),
            ContentBlock::text("Tracker: Built a tracker app", TextStyle::Body),
            ContentBlock::spacer(6),
            ContentBlock::spacer(12),
        ];
        assert_eq!(blocks, expected);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let mut record = jane();
        record.jobs.push(Engagement::new("Acme", "Dev", "A\nB"));
        let options = AssemblyOptions::default();
        assert_eq!(assemble(&record, &options), assemble(&record, &options));
    }

    #[test]
    fn test_optional_links_positioned_after_contact() {
        let mut record = jane();
        record.linkedin = "linkedin.com/in/jane".to_string();
        record.github = "github.com/jane".to_string();

        let sections = assemble_sections(&record, &AssemblyOptions::default());
        let header = &sections[0];
        assert_eq!(header.kind, SectionKind::Header);
        assert_eq!(
            texts(&header.blocks),
            vec![
                "Email: jane@x.com | Phone: 555-0100",
                "LinkedIn: linkedin.com/in/jane",
                "GitHub: github.com/jane",
            ]
        );
        assert!(header.blocks.contains(&ContentBlock::text(
            "GitHub: github.com/jane",
            TextStyle::Link(Color::Green)
        )));
        assert_eq!(header.blocks.last(), Some(&ContentBlock::Rule));
    }

    #[test]
    fn test_github_without_linkedin() {
        let mut record = jane();
        record.github = "github.com/jane".to_string();

        let sections = assemble_sections(&record, &AssemblyOptions::default());
        let header_texts = texts(&sections[0].blocks);
        assert_eq!(header_texts.len(), 2);
        assert!(!header_texts.iter().any(|t| t.starts_with("LinkedIn")));
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let sections = assemble_sections(&jane(), &AssemblyOptions::default());
        assert_eq!(
            kinds(&sections),
            vec![
                SectionKind::Header,
                SectionKind::Objective,
                SectionKind::Skills,
                SectionKind::Education,
                SectionKind::Projects,
            ]
        );

        let blocks = assemble(&jane(), &AssemblyOptions::default());
        let titles = headings(&blocks);
        assert!(!titles.contains(&"INTERNSHIPS".to_string()));
        assert!(!titles.contains(&"WORK EXPERIENCE".to_string()));
        assert!(!titles.contains(&"CERTIFICATIONS".to_string()));
    }

    #[test]
    fn test_full_record_section_order() {
        let mut record = jane();
        record.internships.push(Engagement::new("Lab", "Intern", "Research"));
        record.jobs.push(Engagement::new("Acme", "Dev", "Built API\nWrote tests\nDeployed service"));
        record.certifications.push("Certified Go Developer".to_string());

        let sections = assemble_sections(&record, &AssemblyOptions::default());
        assert_eq!(
            kinds(&sections),
            vec![
                SectionKind::Header,
                SectionKind::Objective,
                SectionKind::Skills,
                SectionKind::Education,
                SectionKind::Projects,
                SectionKind::Internships,
                SectionKind::WorkExperience,
                SectionKind::Certifications,
            ]
        );

        let work = &sections[6];
        assert!(work.blocks.contains(&ContentBlock::bullets(vec![
            "Built API".to_string(),
            "Wrote tests".to_string(),
            "Deployed service".to_string(),
        ])));

        let certs = &sections[7];
        assert!(certs
            .blocks
            .contains(&ContentBlock::bullets(vec!["Certified Go Developer".to_string()])));
    }

    #[test]
    fn test_jobs_without_internships_keep_order() {
        let mut record = jane();
        record.projects.clear();
        record.jobs.push(Engagement::new("Acme", "Dev", "Shipped"));

        let sections = assemble_sections(&record, &AssemblyOptions::default());
        assert_eq!(
            kinds(&sections),
            vec![
                SectionKind::Header,
                SectionKind::Objective,
                SectionKind::Skills,
                SectionKind::Education,
                SectionKind::WorkExperience,
            ]
        );
    }

    #[test]
    fn test_empty_projects_policy() {
        let mut record = jane();
        record.projects.clear();

        let suppressed = assemble(&record, &AssemblyOptions::default());
        assert!(!headings(&suppressed).contains(&"PROJECTS".to_string()));

        let options = AssemblyOptions {
            keep_empty_projects: true,
            ..Default::default()
        };
        let sections = assemble_sections(&record, &options);
        let projects = sections
            .iter()
            .find(|s| s.kind == SectionKind::Projects)
            .map(|s| s.blocks.clone());
        assert_eq!(
            projects,
            Some(vec![
                ContentBlock::heading("PROJECTS", 2, Color::DarkBlue),
                ContentBlock::spacer(6),
                ContentBlock::spacer(12),
            ])
        );
    }

    #[test]
    fn test_trailing_comma_skill_policy() {
        let mut record = jane();
        record.skills = "Python, C++ , Go,".to_string();

        let kept = assemble_sections(&record, &AssemblyOptions::default());
        assert!(kept[2].blocks.contains(&ContentBlock::bullets(vec![
            "Python".to_string(),
            "C++".to_string(),
            "Go".to_string(),
            String::new(),
        ])));

        let options = AssemblyOptions {
            drop_blank_bullets: true,
            ..Default::default()
        };
        let filtered = assemble_sections(&record, &options);
        assert!(filtered[2].blocks.contains(&ContentBlock::bullets(vec![
            "Python".to_string(),
            "C++".to_string(),
            "Go".to_string(),
        ])));
    }

    #[test]
    fn test_multiple_projects_in_input_order() {
        let mut record = jane();
        record.projects.push(Project::new("Chat", "Realtime chat"));

        let sections = assemble_sections(&record, &AssemblyOptions::default());
        let projects = &sections[4];
        assert_eq!(
            texts(&projects.blocks),
            vec!["Tracker: Built a tracker app", "Chat: Realtime chat"]
        );
    }

    #[test]
    fn test_whitespace_only_certification_dropped_when_filtering() {
        let mut record = jane();
        record.certifications = vec!["  ".to_string(), "Certified Go Developer".to_string()];

        let kept = assemble_sections(&record, &AssemblyOptions::default());
        assert!(kept[5].blocks.contains(&ContentBlock::bullets(vec![
            "  ".to_string(),
            "Certified Go Developer".to_string(),
        ])));

        let options = AssemblyOptions {
            drop_blank_bullets: true,
            ..Default::default()
        };
        let filtered = assemble_sections(&record, &options);
        assert_eq!(filtered[5].kind, SectionKind::Certifications);
        assert!(filtered[5]
            .blocks
            .contains(&ContentBlock::bullets(vec!["Certified Go Developer".to_string()])));
    }
}
