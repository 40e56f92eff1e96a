//! Human-readable and machine-readable renderings of a [`ValidationReport`].

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{Issue, IssueLevel};
use crate::engine::ValidationReport;

/// Final verdict line of the human report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Failed,
    PassedWithWarnings,
    Passed,
}

impl Verdict {
    pub fn of(report: &ValidationReport) -> Self {
        if !report.passed() {
            Self::Failed
        } else if !report.is_clean() {
            Self::PassedWithWarnings
        } else {
            Self::Passed
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Verdict::Failed => "Validation FAILED - Please fix errors before proceeding",
            Verdict::PassedWithWarnings => {
                "Validation PASSED with warnings - Consider addressing warnings"
            }
            Verdict::Passed => "Validation PASSED - Configuration is ready to use",
        }
    }
}

/// Flat, persisted form of one [`Issue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub level: String,
    pub category: String,
    pub message: String,
    pub suggestion: Option<String>,
    pub path: Option<String>,
}

impl From<&Issue> for IssueRecord {
    fn from(issue: &Issue) -> Self {
        let level = match issue.level {
            IssueLevel::Error => "error",
            IssueLevel::Warning => "warning",
            IssueLevel::Info => "info",
        };
        Self {
            level: level.to_string(),
            category: issue.category.to_string(),
            message: issue.message.clone(),
            suggestion: issue.suggestion.clone(),
            path: issue.path.clone(),
        }
    }
}

/// One record per issue, in emission order.
pub fn issue_records(report: &ValidationReport) -> Vec<IssueRecord> {
    report.issues.iter().map(IssueRecord::from).collect()
}

/// Serialize the issue records as pretty JSON.
pub fn render_records_json(report: &ValidationReport) -> Result<String> {
    serde_json::to_string_pretty(&issue_records(report)).context("serialize issue records")
}

/// Write the issue records to `path` as pretty JSON.
pub fn write_issue_records_json(path: &Path, report: &ValidationReport) -> Result<()> {
    let content = render_records_json(report)?;
    std::fs::write(path, content).with_context(|| format!("write {:?}", path))?;
    Ok(())
}

const RULE_WIDTH: usize = 60;

/// Render the console report: counts per level, grouped findings, verdict.
pub fn render_text_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    let banner = "=".repeat(RULE_WIDTH);
    out.push_str(&format!(
        "{banner}\nTEAM CONFIGURATION VALIDATION REPORT\n{banner}\n\n"
    ));

    out.push_str("Summary:\n");
    out.push_str(&format!(
        "  - Errors: {}\n  - Warnings: {}\n  - Info: {}\n",
        report.count(IssueLevel::Error),
        report.count(IssueLevel::Warning),
        report.count(IssueLevel::Info),
    ));

    push_section(&mut out, report, IssueLevel::Error, "ERRORS (must fix):");
    push_section(&mut out, report, IssueLevel::Warning, "WARNINGS (should fix):");
    push_section(&mut out, report, IssueLevel::Info, "INFO (suggestions):");

    out.push_str(&format!("\n{}\n", "-".repeat(RULE_WIDTH)));
    out.push_str(Verdict::of(report).summary());
    out.push('\n');
    out
}

fn push_section(out: &mut String, report: &ValidationReport, level: IssueLevel, title: &str) {
    let mut issues = report.at_level(level).peekable();
    if issues.peek().is_none() {
        return;
    }

    out.push_str(&format!("\n{title}\n"));
    for issue in issues {
        out.push_str(&format!("\n  [{}] {}\n", issue.category, issue.message));
        if let Some(suggestion) = &issue.suggestion {
            out.push_str(&format!("    Suggestion: {suggestion}\n"));
        }
        // Locations are noise for informational notes.
        if level != IssueLevel::Info {
            if let Some(path) = &issue.path {
                out.push_str(&format!("    Location: {path}\n"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IssueCategory;
    use serde_json::json;

    fn sample() -> ValidationReport {
        ValidationReport {
            issues: vec![
                Issue::error(IssueCategory::Structure, "Missing required field: name")
                    .with_suggestion("Add 'name' to your configuration")
                    .at("name"),
                Issue::warning(IssueCategory::BestPractices, "No error recovery strategy defined"),
                Issue::info(IssueCategory::Roles, "Small team size (1) may limit parallelization")
                    .at("roles"),
            ],
        }
    }

    #[test]
    fn records_have_five_flat_fields() {
        let raw = serde_json::to_value(issue_records(&sample())).expect("serialize records");
        let first = raw[0].as_object().expect("record object");
        assert_eq!(first.len(), 5);
        assert_eq!(raw[0]["level"], json!("error"));
        assert_eq!(raw[0]["category"], json!("structure"));
        assert_eq!(raw[0]["path"], json!("name"));
        assert_eq!(raw[1]["suggestion"], json!(null));
        assert_eq!(raw[2]["level"], json!("info"));
    }

    #[test]
    fn text_report_groups_and_counts() {
        let text = render_text_report(&sample());
        assert!(text.contains("  - Errors: 1\n  - Warnings: 1\n  - Info: 1\n"));
        let errors_at = text.find("ERRORS (must fix):").expect("errors section");
        let warnings_at = text.find("WARNINGS (should fix):").expect("warnings section");
        let info_at = text.find("INFO (suggestions):").expect("info section");
        assert!(errors_at < warnings_at && warnings_at < info_at);
        assert!(text.contains("    Location: name\n"));
        // Info entries never print their location.
        assert!(!text.contains("Location: roles"));
        assert!(text.trim_end().ends_with(Verdict::Failed.summary()));
    }

    #[test]
    fn verdict_reflects_levels() {
        let clean = ValidationReport { issues: Vec::new() };
        assert_eq!(Verdict::of(&clean), Verdict::Passed);

        let advisory = ValidationReport {
            issues: vec![Issue::info(IssueCategory::Communication, "note")],
        };
        assert_eq!(Verdict::of(&advisory), Verdict::PassedWithWarnings);

        assert_eq!(Verdict::of(&sample()), Verdict::Failed);
    }

    #[test]
    fn empty_sections_are_omitted() {
        let text = render_text_report(&ValidationReport { issues: Vec::new() });
        assert!(!text.contains("ERRORS"));
        assert!(!text.contains("WARNINGS"));
        assert!(text.contains("Validation PASSED - Configuration is ready to use"));
    }

    #[test]
    fn writes_records_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("validation-report.json");
        write_issue_records_json(&path, &sample()).expect("write report");
        let raw: Vec<IssueRecord> =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read back"))
                .expect("parse report");
        assert_eq!(raw.len(), 3);
        assert_eq!(raw[1].category, "best-practices");
    }
}
