//! Role identity, model choice, responsibilities and team size.

use std::collections::HashSet;

use serde_json::Value;

use super::{RuleContext, TeamThresholds};
use crate::domain::document::value_label;
use crate::domain::models::{joined, KNOWN_MODELS};
use crate::domain::{recommend_model, Issue, IssueCategory, ModelTier, RoleEntry};

pub(super) fn check(
    ctx: &RuleContext<'_>,
    thresholds: &TeamThresholds,
    issues: &mut Vec<Issue>,
) {
    let Some(raw) = ctx.document.get("roles") else {
        return;
    };

    if is_empty_collection(raw) {
        issues.push(
            Issue::error(IssueCategory::Roles, "Team must have at least one role")
                .with_suggestion("Add role definitions to your team")
                .at("roles"),
        );
        return;
    }

    let Some(roles) = raw.as_array() else {
        // Shape error already reported by the structure rule.
        return;
    };

    let mut seen_ids: HashSet<String> = HashSet::new();
    for (index, value) in roles.iter().enumerate() {
        let Some(fields) = value.as_object() else {
            issues.push(
                Issue::error(
                    IssueCategory::Roles,
                    format!("Role at index {index} must be a mapping"),
                )
                .with_suggestion("Define each role with at least 'id' and 'model'")
                .at(format!("roles[{index}]")),
            );
            continue;
        };
        check_role(RoleEntry { index, fields }, &mut seen_ids, issues);
    }

    let team_size = roles.len();
    if team_size > thresholds.max_team_size {
        issues.push(
            Issue::warning(
                IssueCategory::Roles,
                format!("Large team size ({team_size}) may cause coordination overhead"),
            )
            .with_suggestion("Consider splitting into smaller sub-teams")
            .at("roles"),
        );
    } else if team_size < thresholds.min_team_size {
        issues.push(
            Issue::info(
                IssueCategory::Roles,
                format!("Small team size ({team_size}) may limit parallelization"),
            )
            .with_suggestion("Consider if additional roles would help")
            .at("roles"),
        );
    }
}

fn check_role(role: RoleEntry<'_>, seen_ids: &mut HashSet<String>, issues: &mut Vec<Issue>) {
    let path = role.path();

    match role.id() {
        None => issues.push(
            Issue::error(
                IssueCategory::Roles,
                format!("Role at index {} missing 'id' field", role.index),
            )
            .with_suggestion("Add unique identifier for the role")
            .at(path.clone()),
        ),
        Some(id) => {
            if seen_ids.contains(&id) {
                issues.push(
                    Issue::error(IssueCategory::Roles, format!("Duplicate role ID: {id}"))
                        .with_suggestion("Ensure all role IDs are unique")
                        .at(path.clone()),
                );
            } else {
                seen_ids.insert(id);
            }
        }
    }

    if let Some(model) = role.model() {
        check_model(&role, model, issues);
    }

    if !role.has_responsibilities() {
        issues.push(
            Issue::warning(
                IssueCategory::Roles,
                format!("Role '{}' has no defined responsibilities", role.label()),
            )
            .with_suggestion("Add clear responsibilities for better task allocation")
            .at(format!("{path}.responsibilities")),
        );
    }
}

fn check_model(role: &RoleEntry<'_>, model: &Value, issues: &mut Vec<Issue>) {
    let path = format!("{}.model", role.path());

    let Some(tier) = model.as_str().and_then(ModelTier::parse) else {
        issues.push(
            Issue::error(
                IssueCategory::Roles,
                format!(
                    "Invalid model '{}' for role {}",
                    value_label(model),
                    role.label()
                ),
            )
            .with_suggestion(format!(
                "Use one of: {}",
                joined(KNOWN_MODELS, ModelTier::as_str)
            ))
            .at(path),
        );
        return;
    };

    let role_type = role.role_type();
    let recommended = recommend_model(role_type);
    if tier != recommended {
        let scope = if role_type.is_empty() {
            "this role".to_string()
        } else {
            format!("{role_type} roles")
        };
        issues.push(
            Issue::info(
                IssueCategory::Optimization,
                format!(
                    "Role '{}' uses {tier}, but {recommended} might be more cost-effective",
                    role.label()
                ),
            )
            .with_suggestion(format!("Consider using {recommended} for {scope}"))
            .at(path),
        );
    }
}

fn is_empty_collection(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
