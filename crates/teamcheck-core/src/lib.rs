//! teamcheck core library
//!
//! Static validation of multi-agent team configurations: structural,
//! relational and policy rules over a parsed document, with cycle detection
//! on the role reporting graph.

pub mod domain;
pub mod engine;
pub mod graph;
pub mod loader;
pub mod reporting;
pub mod rules;
pub mod telemetry;

pub use domain::{
    recommend_model, Issue, IssueCategory, IssueLevel, LoadError, ModelTier, TeamDocument,
    TokenBudget,
};
pub use engine::{validate, validate_with, ValidationReport};
pub use graph::ReportingGraph;
pub use loader::{load_document, parse_document, DocumentFormat};
pub use reporting::{
    issue_records, render_records_json, render_text_report, write_issue_records_json,
    IssueRecord, Verdict,
};
pub use rules::{Rule, RuleSet, TeamThresholds, ALL_RULES};
pub use telemetry::init_tracing;

/// teamcheck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
