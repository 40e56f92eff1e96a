//! Required top-level keys.

use serde_json::Value;

use super::RuleContext;
use crate::domain::document::value_kind;
use crate::domain::{Issue, IssueCategory};

/// Keys every team configuration must declare.
pub const REQUIRED_FIELDS: &[&str] = &["name", "roles", "workflow"];

pub(super) fn check(ctx: &RuleContext<'_>, issues: &mut Vec<Issue>) {
    let doc = ctx.document;

    for &field in REQUIRED_FIELDS {
        if !doc.contains(field) {
            issues.push(
                Issue::error(
                    IssueCategory::Structure,
                    format!("Missing required field: {field}"),
                )
                .with_suggestion(format!("Add '{field}' to your configuration"))
                .at(field),
            );
        }
    }

    if let Some(name) = doc.get("name") {
        let valid = name.as_str().is_some_and(|s| !s.is_empty());
        if !valid {
            issues.push(
                Issue::error(IssueCategory::Structure, "Team name must be a non-empty string")
                    .with_suggestion("Provide a descriptive team name")
                    .at("name"),
            );
        }
    }

    // Null and empty collections are left to the roles rule.
    if let Some(roles) = doc.get("roles") {
        if !matches!(roles, Value::Null | Value::Array(_)) && !is_empty_mapping(roles) {
            issues.push(
                Issue::error(
                    IssueCategory::Structure,
                    format!("Field 'roles' must be a sequence, found {}", value_kind(roles)),
                )
                .with_suggestion("Declare roles as a list of role definitions")
                .at("roles"),
            );
        }
    }

    if let Some(workflow) = doc.get("workflow") {
        if !workflow.is_object() {
            issues.push(
                Issue::error(
                    IssueCategory::Structure,
                    format!(
                        "Field 'workflow' must be a mapping, found {}",
                        value_kind(workflow)
                    ),
                )
                .with_suggestion("Declare workflow as a mapping with a 'phases' list")
                .at("workflow"),
            );
        }
    }
}

fn is_empty_mapping(value: &Value) -> bool {
    value.as_object().is_some_and(|m| m.is_empty())
}
