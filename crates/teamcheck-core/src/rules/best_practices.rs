//! Optional sections a production-ready team usually declares.

use super::{RuleContext, TeamThresholds};
use crate::domain::{Issue, IssueCategory};

pub(super) fn check(
    ctx: &RuleContext<'_>,
    thresholds: &TeamThresholds,
    issues: &mut Vec<Issue>,
) {
    let doc = ctx.document;

    if !doc.contains("quality_gates") {
        issues.push(
            Issue::info(IssueCategory::BestPractices, "No quality gates defined")
                .with_suggestion("Consider adding quality checkpoints"),
        );
    }

    if !doc.contains("error_recovery") {
        issues.push(
            Issue::warning(
                IssueCategory::BestPractices,
                "No error recovery strategy defined",
            )
            .with_suggestion("Add error recovery mechanisms for resilience"),
        );
    }

    if !doc.contains("success_metrics") {
        issues.push(
            Issue::info(IssueCategory::BestPractices, "No success metrics defined")
                .with_suggestion("Define measurable success criteria"),
        );
    }

    if let Some(phases) = doc.phases() {
        let has_parallel = doc.phase_entries().iter().any(|p| p.mentions_parallel());
        if !has_parallel && phases.len() > thresholds.parallel_phase_threshold {
            issues.push(
                Issue::info(
                    IssueCategory::Optimization,
                    "No parallel phases detected in workflow",
                )
                .with_suggestion("Consider parallelizing independent tasks for faster completion")
                .at("workflow.phases"),
            );
        }
    }
}
