//! Communication channel coverage.

use super::RuleContext;
use crate::domain::{Issue, IssueCategory};

/// Channel `type` that counts as a synchronous touchpoint.
pub const SYNCHRONOUS: &str = "synchronous";

pub(super) fn check(ctx: &RuleContext<'_>, issues: &mut Vec<Issue>) {
    if !ctx.document.contains("communication") {
        issues.push(
            Issue::info(
                IssueCategory::Communication,
                "No communication protocols defined",
            )
            .with_suggestion("Consider defining communication channels and protocols"),
        );
        return;
    }

    let channels = ctx.document.channel_entries();

    if !channels.iter().any(|ch| ch.kind() == Some(SYNCHRONOUS)) {
        issues.push(
            Issue::warning(
                IssueCategory::Communication,
                "No synchronous communication channel defined",
            )
            .with_suggestion("Add at least one synchronous channel (e.g., daily standup)")
            .at("communication.channels"),
        );
    }

    for channel in channels.iter().filter(|ch| !ch.has_frequency()) {
        issues.push(
            Issue::info(
                IssueCategory::Communication,
                format!("Channel '{}' has no defined frequency", channel.label()),
            )
            .with_suggestion("Specify communication frequency")
            .at(format!("{}.frequency", channel.path())),
        );
    }
}
