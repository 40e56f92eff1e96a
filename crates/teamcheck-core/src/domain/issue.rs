//! Validation findings.

use serde::{Deserialize, Serialize};

/// Finding severity. Only [`IssueLevel::Error`] blocks a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueLevel {
    Error,
    Warning,
    Info,
}

impl IssueLevel {
    /// Whether a finding at this level fails validation.
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl std::fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IssueLevel::Error => "ERROR",
            IssueLevel::Warning => "WARNING",
            IssueLevel::Info => "INFO",
        };
        write!(f, "{s}")
    }
}

/// Grouping tag attached to every finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    Structure,
    Roles,
    Optimization,
    Workflow,
    Communication,
    Dependencies,
    Resources,
    BestPractices,
}

impl IssueCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueCategory::Structure => "structure",
            IssueCategory::Roles => "roles",
            IssueCategory::Optimization => "optimization",
            IssueCategory::Workflow => "workflow",
            IssueCategory::Communication => "communication",
            IssueCategory::Dependencies => "dependencies",
            IssueCategory::Resources => "resources",
            IssueCategory::BestPractices => "best-practices",
        }
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding.
///
/// Issues are plain values accumulated in emission order; the same role or
/// phase may legitimately produce several of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub level: IssueLevel,
    pub category: IssueCategory,
    /// Human-readable description of the finding.
    pub message: String,
    /// Optional remediation hint.
    pub suggestion: Option<String>,
    /// Optional pointer into the document, e.g. `roles[2].model`.
    pub path: Option<String>,
}

impl Issue {
    pub fn new(level: IssueLevel, category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            level,
            category,
            message: message.into(),
            suggestion: None,
            path: None,
        }
    }

    pub fn error(category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(IssueLevel::Error, category, message)
    }

    pub fn warning(category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(IssueLevel::Warning, category, message)
    }

    pub fn info(category: IssueCategory, message: impl Into<String>) -> Self {
        Self::new(IssueLevel::Info, category, message)
    }

    /// Attach a remediation hint (builder pattern).
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach a document path (builder pattern).
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_errors_block() {
        assert!(IssueLevel::Error.is_blocking());
        assert!(!IssueLevel::Warning.is_blocking());
        assert!(!IssueLevel::Info.is_blocking());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let issue = Issue::warning(IssueCategory::Roles, "no responsibilities")
            .with_suggestion("add some")
            .at("roles[0].responsibilities");
        assert_eq!(issue.level, IssueLevel::Warning);
        assert_eq!(issue.suggestion.as_deref(), Some("add some"));
        assert_eq!(issue.path.as_deref(), Some("roles[0].responsibilities"));
    }

    #[test]
    fn serializes_with_lowercase_tags() {
        let issue = Issue::info(IssueCategory::BestPractices, "No quality gates defined");
        let raw = serde_json::to_value(&issue).expect("serialize issue");
        assert_eq!(raw["level"], "info");
        assert_eq!(raw["category"], "best-practices");
        assert!(raw["suggestion"].is_null());
        assert!(raw["path"].is_null());
    }

    #[test]
    fn level_display_is_uppercase() {
        assert_eq!(IssueLevel::Error.to_string(), "ERROR");
        assert_eq!(IssueLevel::Warning.to_string(), "WARNING");
        assert_eq!(IssueLevel::Info.to_string(), "INFO");
    }
}
