//! Phase identity, dependency ordering and duration split.

use std::collections::HashSet;

use super::{RuleContext, TeamThresholds};
use crate::domain::document::value_kind;
use crate::domain::{Issue, IssueCategory, PhaseEntry};

pub(super) fn check(
    ctx: &RuleContext<'_>,
    thresholds: &TeamThresholds,
    issues: &mut Vec<Issue>,
) {
    let Some(workflow) = ctx.document.workflow() else {
        return;
    };

    let Some(raw) = workflow.get("phases") else {
        issues.push(
            Issue::warning(IssueCategory::Workflow, "No workflow phases defined")
                .with_suggestion("Define phases for better task organization")
                .at("workflow.phases"),
        );
        return;
    };

    let Some(phases) = raw.as_array() else {
        issues.push(
            Issue::error(
                IssueCategory::Workflow,
                format!("Workflow phases must be a sequence, found {}", value_kind(raw)),
            )
            .with_suggestion("Declare phases as a list of phase definitions")
            .at("workflow.phases"),
        );
        return;
    };

    let mut declared: HashSet<String> = HashSet::new();
    let mut total_percent: i64 = 0;

    for (index, value) in phases.iter().enumerate() {
        let Some(fields) = value.as_object() else {
            issues.push(
                Issue::error(
                    IssueCategory::Workflow,
                    format!("Phase at index {index} must be a mapping"),
                )
                .with_suggestion("Define each phase with at least a 'name'")
                .at(format!("workflow.phases[{index}]")),
            );
            continue;
        };
        let phase = PhaseEntry { index, fields };

        let mut new_name = None;
        match phase.name() {
            None => issues.push(
                Issue::error(
                    IssueCategory::Workflow,
                    format!("Phase at index {index} missing 'name'"),
                )
                .with_suggestion("Add name for the phase")
                .at(phase.path()),
            ),
            Some(name) if declared.contains(&name) => issues.push(
                Issue::error(
                    IssueCategory::Workflow,
                    format!("Duplicate phase name: {name}"),
                )
                .with_suggestion("Ensure phase names are unique")
                .at(format!("{}.name", phase.path())),
            ),
            Some(name) => new_name = Some(name),
        }

        // Dependencies may only point at phases declared strictly earlier.
        check_dependencies(&phase, &declared, issues);
        // Inserted after the check so a phase cannot depend on itself.
        declared.extend(new_name);

        if let Some(percent) = phase.duration().and_then(parse_percent) {
            total_percent = total_percent.saturating_add(percent);
        }
    }

    let expected = thresholds.duration_total_percent;
    if total_percent > 0 && total_percent != expected {
        issues.push(
            Issue::warning(
                IssueCategory::Workflow,
                format!("Phase durations sum to {total_percent}%, not {expected}%"),
            )
            .with_suggestion(format!("Adjust phase durations to sum to {expected}%"))
            .at("workflow.phases"),
        );
    }
}

fn check_dependencies(
    phase: &PhaseEntry<'_>,
    declared: &HashSet<String>,
    issues: &mut Vec<Issue>,
) {
    for dep in phase.dependencies() {
        if !declared.contains(&dep) {
            issues.push(
                Issue::error(
                    IssueCategory::Workflow,
                    format!(
                        "Phase '{}' depends on undefined phase '{dep}'",
                        phase.label()
                    ),
                )
                .with_suggestion(format!("Ensure '{dep}' is defined before this phase"))
                .at(format!("{}.dependencies", phase.path())),
            );
        }
    }
}

/// Parse `"40%"` into `40`. Anything else is ignored.
fn parse_percent(duration: &str) -> Option<i64> {
    duration.strip_suffix('%')?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IssueLevel, TeamDocument};
    use serde_json::{json, Value};

    fn run(workflow: Value) -> Vec<Issue> {
        let doc = TeamDocument::from_value(json!({ "workflow": workflow })).expect("mapping");
        let ctx = RuleContext::new(&doc);
        let mut issues = Vec::new();
        check(&ctx, &TeamThresholds::default(), &mut issues);
        issues
    }

    #[test]
    fn missing_phases_is_warning() {
        let issues = run(json!({}));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Warning);
        assert_eq!(issues[0].message, "No workflow phases defined");
    }

    #[test]
    fn empty_phase_list_is_clean() {
        assert!(run(json!({ "phases": [] })).is_empty());
    }

    #[test]
    fn ordered_dependencies_pass() {
        let issues = run(json!({ "phases": [
            { "name": "design" },
            { "name": "build", "dependencies": ["design"] },
            { "name": "test", "dependencies": ["design", "build"] }
        ] }));
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn forward_reference_is_an_error_even_if_declared_later() {
        let issues = run(json!({ "phases": [
            { "name": "build", "dependencies": ["design"] },
            { "name": "design" }
        ] }));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Phase 'build' depends on undefined phase 'design'"
        );
        assert_eq!(
            issues[0].path.as_deref(),
            Some("workflow.phases[0].dependencies")
        );
    }

    #[test]
    fn self_dependency_is_an_error() {
        let issues = run(json!({ "phases": [{ "name": "loop", "dependencies": ["loop"] }] }));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("undefined phase 'loop'"));
    }

    #[test]
    fn duplicate_and_missing_names() {
        let issues = run(json!({ "phases": [
            { "name": "design" },
            { "description": "nameless" },
            { "name": "design" }
        ] }));
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, "Phase at index 1 missing 'name'");
        assert_eq!(issues[1].message, "Duplicate phase name: design");
        assert_eq!(issues[1].path.as_deref(), Some("workflow.phases[2].name"));
    }

    #[test]
    fn durations_must_sum_to_hundred() {
        let issues = run(json!({ "phases": [
            { "name": "design", "duration": "40%" },
            { "name": "build", "duration": "40%" }
        ] }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Warning);
        assert_eq!(issues[0].message, "Phase durations sum to 80%, not 100%");
    }

    #[test]
    fn oversized_durations_saturate_instead_of_overflowing() {
        let issues = run(json!({ "phases": [
            { "name": "a", "duration": "9223372036854775807%" },
            { "name": "b", "duration": "1%" }
        ] }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Warning);
        assert_eq!(
            issues[0].message,
            format!("Phase durations sum to {}%, not 100%", i64::MAX)
        );
    }

    #[test]
    fn exact_hundred_and_malformed_values_are_quiet() {
        let issues = run(json!({ "phases": [
            { "name": "design", "duration": "30%" },
            { "name": "build", "duration": "70%" },
            { "name": "test", "duration": "lots%" },
            { "name": "ship", "duration": "2 days" }
        ] }));
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn no_percentages_means_no_duration_check() {
        let issues = run(json!({ "phases": [{ "name": "design", "duration": "2w" }] }));
        assert!(issues.is_empty());
    }

    #[test]
    fn non_sequence_phases_is_an_error() {
        let issues = run(json!({ "phases": "design" }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Error);
    }

    #[test]
    fn parse_percent_accepts_padded_integers() {
        assert_eq!(parse_percent("25%"), Some(25));
        assert_eq!(parse_percent(" 25 %"), Some(25));
        assert_eq!(parse_percent("25"), None);
        assert_eq!(parse_percent("12.5%"), None);
    }
}
