//! Reporting relation: every supervisor must exist and the chain must not loop.

use super::RuleContext;
use crate::domain::{Issue, IssueCategory};

pub(super) fn check(ctx: &RuleContext<'_>, issues: &mut Vec<Issue>) {
    if ctx.roles.is_empty() {
        return;
    }

    for role in &ctx.roles {
        let Some(supervisor) = role.reports_to() else {
            continue;
        };
        if !ctx.role_ids.contains(&supervisor) {
            issues.push(
                Issue::error(
                    IssueCategory::Dependencies,
                    format!(
                        "Role '{}' reports to undefined role '{supervisor}'",
                        role.label()
                    ),
                )
                .with_suggestion(format!("Ensure '{supervisor}' is defined in roles"))
                .at(format!("{}.reports_to", role.path())),
            );
        }
    }

    if let Some(cycle) = ctx.reporting.find_cycle() {
        tracing::debug!(cycle = ?cycle, "reporting cycle detected");
        issues.push(
            Issue::error(
                IssueCategory::Dependencies,
                format!(
                    "Circular reporting dependency detected: {}",
                    cycle.join(" -> ")
                ),
            )
            .with_suggestion("Remove circular dependencies in reporting structure")
            .at("roles"),
        );
    }
}
