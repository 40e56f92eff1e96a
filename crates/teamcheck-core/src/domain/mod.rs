//! Domain models for teamcheck.
//!
//! - `TeamDocument`: read-only view over a parsed configuration
//! - `Issue`: a single validation finding
//! - `ModelTier` / `TokenBudget`: enum vocabularies and lookup tables
//! - `LoadError`: failures that happen before validation starts

pub mod document;
pub mod error;
pub mod issue;
pub mod models;

pub use document::{ChannelEntry, PhaseEntry, RoleEntry, TeamDocument};
pub use error::{LoadError, Result};
pub use issue::{Issue, IssueCategory, IssueLevel};
pub use models::{recommend_model, ModelTier, TokenBudget};
