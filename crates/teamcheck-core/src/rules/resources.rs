//! Token budget vs. model mix.

use super::{RuleContext, TeamThresholds};
use crate::domain::document::value_label;
use crate::domain::models::{joined, KNOWN_BUDGETS};
use crate::domain::{Issue, IssueCategory, ModelTier, TokenBudget};

pub(super) fn check(
    ctx: &RuleContext<'_>,
    thresholds: &TeamThresholds,
    issues: &mut Vec<Issue>,
) {
    let Some(raw) = ctx.document.get("token_budget") else {
        return;
    };

    let budget = raw.as_str().and_then(TokenBudget::parse);
    if budget.is_none() {
        issues.push(
            Issue::warning(
                IssueCategory::Resources,
                format!("Unknown token budget '{}'", value_label(raw)),
            )
            .with_suggestion(format!(
                "Use one of: {}",
                joined(KNOWN_BUDGETS, TokenBudget::as_str)
            ))
            .at("token_budget"),
        );
    }

    if ctx.document.roles().is_none() {
        return;
    }

    let top_tier = ctx
        .roles
        .iter()
        .filter_map(|r| r.model()?.as_str().and_then(ModelTier::parse))
        .filter(|m| m.is_top_tier())
        .count();

    match budget {
        Some(TokenBudget::Economic) if top_tier > thresholds.economic_top_tier_limit => {
            issues.push(
                Issue::warning(
                    IssueCategory::Resources,
                    format!("Economic budget with {top_tier} Opus agents may be expensive"),
                )
                .with_suggestion("Consider using more Sonnet/Haiku models")
                .at("roles"),
            );
        }
        Some(TokenBudget::Premium) if top_tier < thresholds.premium_top_tier_floor => {
            issues.push(
                Issue::info(
                    IssueCategory::Resources,
                    "Premium budget allows for more Opus agents if needed",
                )
                .with_suggestion("Consider using Opus for critical decision-making roles")
                .at("roles"),
            );
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IssueLevel, TeamDocument};
    use serde_json::{json, Value};

    fn run(value: Value) -> Vec<Issue> {
        let doc = TeamDocument::from_value(value).expect("mapping");
        let ctx = RuleContext::new(&doc);
        let mut issues = Vec::new();
        check(&ctx, &TeamThresholds::default(), &mut issues);
        issues
    }

    fn team(budget: &str, models: &[&str]) -> Value {
        let roles: Vec<Value> = models
            .iter()
            .enumerate()
            .map(|(i, m)| json!({ "id": format!("r{i}"), "model": m }))
            .collect();
        json!({ "token_budget": budget, "roles": roles })
    }

    #[test]
    fn absent_budget_is_not_checked() {
        assert!(run(json!({ "roles": [{ "id": "a", "model": "opus" }] })).is_empty());
    }

    #[test]
    fn unknown_budget_is_warning_only() {
        let issues = run(team("unlimited", &["opus", "opus", "opus"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Warning);
        assert_eq!(issues[0].message, "Unknown token budget 'unlimited'");
        assert_eq!(issues[0].path.as_deref(), Some("token_budget"));
    }

    #[test]
    fn economic_budget_with_many_opus_roles_warns() {
        let issues = run(team("economic", &["opus", "opus", "haiku"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Economic budget with 2 Opus agents may be expensive"
        );

        assert!(run(team("economic", &["opus", "sonnet", "haiku"])).is_empty());
    }

    #[test]
    fn premium_budget_with_few_opus_roles_is_info() {
        let issues = run(team("premium", &["opus", "sonnet"]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Info);

        assert!(run(team("premium", &["opus", "opus"])).is_empty());
    }

    #[test]
    fn balanced_budget_has_no_cross_check() {
        assert!(run(team("balanced", &["opus", "opus", "opus", "opus"])).is_empty());
    }
}
