// src/types/resume_record.rs
//! Validated résumé input handed from intake to assembly

// ===== Résumé Record =====

/// Everything the assembler needs to lay out one résumé.
///
/// Required fields arrive non-empty from intake. `linkedin` and `github` may be
/// empty, which means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub objective: String,
    /// Comma separated, see [`ResumeRecord::skill_tokens`]
    pub skills: String,
    pub education: String,
    pub projects: Vec<Project>,
    pub internships: Vec<Engagement>,
    pub jobs: Vec<Engagement>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
}

/// One internship or job. `description` may hold several lines, one bullet each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engagement {
    pub organization: String,
    pub role: String,
    pub description: String,
}

impl ResumeRecord {
    /// Split `skills` on commas and trim each token. Order and duplicates are
    /// kept, and so are empty tokens (e.g. from a trailing comma).
    pub fn skill_tokens(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(|token| token.trim().to_string())
            .collect()
    }

    pub fn has_linkedin(&self) -> bool {
        !self.linkedin.is_empty()
    }

    pub fn has_github(&self) -> bool {
        !self.github.is_empty()
    }
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Engagement {
    pub fn new(
        organization: impl Into<String>,
        role: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            role: role.into(),
            description: description.into(),
        }
    }

    /// Description split on line breaks, each segment trimmed. Blank segments
    /// are passed through.
    pub fn description_points(&self) -> Vec<String> {
        self.description
            .split('\n')
            .map(|point| point.trim().to_string())
            .collect()
    }
}
