use crate::models::Issue;
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub const NO_ISSUES: &str = "No issues found!";

pub struct Renderer {
    colored: bool,
}

impl Renderer {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn key(&self, key: &str) -> String {
        if self.colored {
            key.yellow().to_string()
        } else {
            key.to_string()
        }
    }

    fn evidence(&self, completed: bool) -> String {
        match (completed, self.colored) {
            (true, true) => "Completa".green().to_string(),
            (true, false) => "Completa".to_string(),
            (false, true) => "Incompleta".red().to_string(),
            (false, false) => "Incompleta".to_string(),
        }
    }

    /// Full listing followed by the issues that still lack evidence.
    pub fn render(&self, out: &mut impl Write, issues: &[Issue]) -> io::Result<()> {
        if issues.is_empty() {
            writeln!(out, "{}", NO_ISSUES)?;
            return Ok(());
        }

        self.render_listing(out, issues)?;
        self.render_missing_evidence(out, issues)
    }

    fn render_listing(&self, out: &mut impl Write, issues: &[Issue]) -> io::Result<()> {
        for issue in issues {
            writeln!(out, "- [{}] {}", self.key(&issue.key), issue.summary)?;
            writeln!(out, "\t- {}", issue.url)?;
            writeln!(out, "\t- Informador: {}", issue.reporter)?;
            writeln!(out, "\t- Responsable: {}", issue.assignee)?;
            writeln!(out, "\t- Status: {}", issue.status)?;
            writeln!(out, "\t- Evidencia: {}", self.evidence(issue.evidence_completed))?;
        }
        Ok(())
    }

    fn render_missing_evidence(&self, out: &mut impl Write, issues: &[Issue]) -> io::Result<()> {
        let missing: Vec<&Issue> = issues
            .iter()
            .filter(|issue| !issue.evidence_completed)
            .collect();
        if missing.is_empty() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "Issues sin evidencia ({}):", missing.len())?;
        for issue in missing {
            writeln!(out, "- [{}] {}", self.key(&issue.key), issue.url)?;
        }
        Ok(())
    }
}
