//! Validation rule set.
//!
//! Every [`Rule`] is an independent check over a [`RuleContext`] that appends
//! zero or more [`Issue`]s to the run's accumulator. Within a rule, issues are
//! emitted in document order (role index, phase index). A [`RuleSet`] fixes
//! which rules run, in which order, and the numeric limits they use.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Issue, RoleEntry, TeamDocument};
use crate::graph::ReportingGraph;

mod best_practices;
mod communication;
mod dependencies;
mod resources;
mod roles;
mod structure;
mod workflow;

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// A single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Required top-level keys and the team name.
    Structure,
    /// Role identity, model choice, responsibilities, team size.
    Roles,
    /// Phase identity, dependency ordering, duration split.
    Workflow,
    /// Channel coverage and cadence.
    Communication,
    /// `reports_to` resolution and reporting cycles.
    Dependencies,
    /// Token budget vs. model mix.
    Resources,
    /// Optional sections that well-run teams usually declare.
    BestPractices,
}

/// Every rule, in the order the engine runs them.
pub const ALL_RULES: &[Rule] = &[
    Rule::Structure,
    Rule::Roles,
    Rule::Workflow,
    Rule::Communication,
    Rule::Dependencies,
    Rule::Resources,
    Rule::BestPractices,
];

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::Structure => "structure",
            Rule::Roles => "roles",
            Rule::Workflow => "workflow",
            Rule::Communication => "communication",
            Rule::Dependencies => "dependencies",
            Rule::Resources => "resources",
            Rule::BestPractices => "best_practices",
        }
    }

    /// Run this rule, appending findings to `issues`.
    pub fn check(
        self,
        ctx: &RuleContext<'_>,
        thresholds: &TeamThresholds,
        issues: &mut Vec<Issue>,
    ) {
        match self {
            Rule::Structure => structure::check(ctx, issues),
            Rule::Roles => roles::check(ctx, thresholds, issues),
            Rule::Workflow => workflow::check(ctx, thresholds, issues),
            Rule::Communication => communication::check(ctx, issues),
            Rule::Dependencies => dependencies::check(ctx, issues),
            Rule::Resources => resources::check(ctx, thresholds, issues),
            Rule::BestPractices => best_practices::check(ctx, thresholds, issues),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Numeric policy limits used by the heuristic checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamThresholds {
    /// Teams larger than this get a coordination-overhead warning.
    pub max_team_size: usize,
    /// Teams smaller than this get a parallelization note.
    pub min_team_size: usize,
    /// Expected sum of percentage phase durations.
    pub duration_total_percent: i64,
    /// Workflows with more phases than this should show some parallelism.
    pub parallel_phase_threshold: usize,
    /// Most top-tier roles an `economic` budget tolerates without warning.
    pub economic_top_tier_limit: usize,
    /// Fewest top-tier roles a `premium` budget is expected to use.
    pub premium_top_tier_floor: usize,
}

impl Default for TeamThresholds {
    fn default() -> Self {
        Self {
            max_team_size: 15,
            min_team_size: 3,
            duration_total_percent: 100,
            parallel_phase_threshold: 3,
            economic_top_tier_limit: 1,
            premium_top_tier_floor: 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Rule set
// ---------------------------------------------------------------------------

/// An ordered list of rules plus the thresholds they reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub thresholds: TeamThresholds,
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// Every rule in declared order with default thresholds.
    pub fn standard() -> Self {
        Self {
            thresholds: TeamThresholds::default(),
            rules: ALL_RULES.to_vec(),
        }
    }

    /// A rule set with no rules; combine with [`RuleSet::with_rule`].
    pub fn empty() -> Self {
        Self {
            thresholds: TeamThresholds::default(),
            rules: Vec::new(),
        }
    }

    /// Add a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Override thresholds.
    pub fn with_thresholds(mut self, thresholds: TeamThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// The document plus indices derived from it once per run.
#[derive(Debug)]
pub struct RuleContext<'a> {
    pub document: &'a TeamDocument,
    /// Mapping-shaped roles in document order.
    pub roles: Vec<RoleEntry<'a>>,
    /// Every declared role id.
    pub role_ids: HashSet<String>,
    /// `role id → supervisor id` for roles that declare both.
    pub reporting: ReportingGraph,
}

impl<'a> RuleContext<'a> {
    pub fn new(document: &'a TeamDocument) -> Self {
        let roles = document.role_entries();
        let role_ids = roles.iter().filter_map(RoleEntry::id).collect();
        let reporting = roles
            .iter()
            .filter_map(|r| Some((r.id()?, r.reports_to()?)))
            .collect();

        Self {
            document,
            roles,
            role_ids,
            reporting,
        }
    }
}
