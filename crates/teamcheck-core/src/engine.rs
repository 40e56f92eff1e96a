//! Validation engine.
//!
//! Runs a [`RuleSet`] over a [`TeamDocument`] and collects the findings into
//! a [`ValidationReport`]. Each call owns its accumulator and performs no
//! I/O, so independent documents may be validated concurrently.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Issue, IssueLevel, TeamDocument};
use crate::rules::{RuleContext, RuleSet};

/// Outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Findings in emission order.
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Whether validation passed (no ERROR-level issues).
    pub fn passed(&self) -> bool {
        !self.issues.iter().any(|i| i.level.is_blocking())
    }

    /// Number of issues at `level`.
    pub fn count(&self, level: IssueLevel) -> usize {
        self.issues.iter().filter(|i| i.level == level).count()
    }

    /// Issues at `level`, in emission order.
    pub fn at_level(&self, level: IssueLevel) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.level == level)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate `document` against the standard rule set.
pub fn validate(document: &TeamDocument) -> ValidationReport {
    validate_with(&RuleSet::standard(), document)
}

/// Validate `document` against a custom [`RuleSet`].
///
/// Every rule runs exactly once, in the set's order; issues are concatenated
/// in that order.
pub fn validate_with(rule_set: &RuleSet, document: &TeamDocument) -> ValidationReport {
    let ctx = RuleContext::new(document);
    let mut issues = Vec::new();

    for rule in &rule_set.rules {
        let before = issues.len();
        rule.check(&ctx, &rule_set.thresholds, &mut issues);
        debug!(
            event = "rule.evaluated",
            rule = %rule,
            issues = issues.len() - before,
        );
    }

    let report = ValidationReport { issues };
    info!(
        event = "validation.finished",
        errors = report.count(IssueLevel::Error),
        warnings = report.count(IssueLevel::Warning),
        info = report.count(IssueLevel::Info),
        passed = report.passed(),
    );
    report
}
