// src/intake.rs
//! Interactive collection of a [`ResumeRecord`].
//!
//! [`Intake`] is the seam: each operation owns its own retry policy, and
//! [`collect_record`] only decides which questions to ask in which order.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

use crate::types::{Engagement, Project, ResumeRecord};

const EMPTY_FIELD_MESSAGE: &str = "This field cannot be empty. Please enter a valid input.";
const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number.";

pub trait Intake {
    /// Re-prompts until a non-empty line is entered
    fn collect_required(&mut self, prompt: &str) -> Result<String>;

    /// Returns the line as entered, possibly empty
    fn collect_optional(&mut self, prompt: &str) -> Result<String>;

    /// Re-prompts until the line is a non-negative integer
    fn collect_count(&mut self, prompt: &str) -> Result<usize>;

    /// Reads lines up to the first empty one and joins them with `\n`.
    /// Re-prompts if nothing was entered.
    fn collect_lines(&mut self, prompt: &str) -> Result<String>;
}

/// [`Intake`] over a line reader and a prompt writer
pub struct PromptIntake<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptIntake<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{}: ", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).context("Failed to write message")
    }

    /// Next line without its terminator. End of input is an error: there is
    /// nobody left to answer the question.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input closed before the resume was complete");
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Intake for PromptIntake<R, W> {
    fn collect_required(&mut self, prompt: &str) -> Result<String> {
        loop {
            self.prompt(prompt)?;
            let line = self.read_line()?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
            self.say(EMPTY_FIELD_MESSAGE)?;
        }
    }

    fn collect_optional(&mut self, prompt: &str) -> Result<String> {
        self.prompt(prompt)?;
        self.read_line()
    }

    fn collect_count(&mut self, prompt: &str) -> Result<usize> {
        loop {
            self.prompt(prompt)?;
            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(count) => return Ok(count),
                Err(_) => self.say(INVALID_NUMBER_MESSAGE)?,
            }
        }
    }

    fn collect_lines(&mut self, prompt: &str) -> Result<String> {
        loop {
            self.prompt(&format!("{} (one point per line, empty line to finish)", prompt))?;

            let mut lines = Vec::new();
            loop {
                let line = self.read_line()?;
                if line.trim().is_empty() {
                    break;
                }
                lines.push(line);
            }

            if !lines.is_empty() {
                return Ok(lines.join("\n"));
            }
            self.say(EMPTY_FIELD_MESSAGE)?;
        }
    }
}

/// Ask the full question sequence and build the record.
pub fn collect_record(intake: &mut impl Intake) -> Result<ResumeRecord> {
    let name = intake.collect_required("Enter your full name")?;
    let email = intake.collect_required("Enter your email address")?;
    let phone = intake.collect_required("Enter your phone number")?;
    let linkedin = intake.collect_optional("Enter your LinkedIn profile link (optional)")?;
    let github = intake.collect_optional("Enter your GitHub link (optional)")?;
    let objective = intake.collect_required("Enter your career objective or summary")?;
    let skills = intake.collect_required("Enter your skills (comma separated)")?;
    let education = intake
        .collect_required("Enter your highest education (e.g., B.Tech in Computer Science)")?;

    let project_count = intake.collect_count("How many projects would you like to add?")?;
    let mut projects = Vec::new();
    for i in 0..project_count {
        let title = intake.collect_required(&format!("Enter title for Project {}", i + 1))?;
        let description =
            intake.collect_required(&format!("Enter description for Project '{}'", title))?;
        projects.push(Project { title, description });
    }

    let internships = collect_engagements(
        intake,
        "How many internship experiences would you like to add? (optional, 0 for none)",
        "Internship",
    )?;
    let jobs = collect_engagements(
        intake,
        "How many job experiences would you like to add? (optional, 0 for none)",
        "Job",
    )?;

    let cert_count = intake
        .collect_count("How many certifications do you want to add? (optional, 0 for none)")?;
    let mut certifications = Vec::new();
    for i in 0..cert_count {
        certifications.push(intake.collect_required(&format!(
            "Enter Certification {} details (e.g., 'Certified Python Developer')",
            i + 1
        ))?);
    }

    info!(
        "Collected resume data: {} projects, {} internships, {} jobs, {} certifications",
        projects.len(),
        internships.len(),
        jobs.len(),
        certifications.len()
    );

    Ok(ResumeRecord {
        name,
        email,
        phone,
        linkedin: linkedin.trim().to_string(),
        github: github.trim().to_string(),
        objective,
        skills,
        education,
        projects,
        internships,
        jobs,
        certifications,
    })
}

fn collect_engagements(
    intake: &mut impl Intake,
    count_prompt: &str,
    kind: &str,
) -> Result<Vec<Engagement>> {
    let count = intake.collect_count(count_prompt)?;
    let mut engagements = Vec::new();
    for i in 0..count {
        let organization =
            intake.collect_required(&format!("Enter company name for {} {}", kind, i + 1))?;
        let role = intake.collect_required(&format!("Enter your role at {}", organization))?;
        let description = intake.collect_lines(&format!(
            "Enter description for {} at {}",
            kind, organization
        ))?;
        engagements.push(Engagement {
            organization,
            role,
            description,
        });
    }
    Ok(engagements)
}
