//! Model tiers, token budgets, and the model-fit lookup table.

use serde::{Deserialize, Serialize};

/// Capability tier assigned to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    Opus,
    Sonnet,
    Haiku,
}

/// Accepted `model` values, in documentation order.
pub const KNOWN_MODELS: &[ModelTier] = &[ModelTier::Opus, ModelTier::Sonnet, ModelTier::Haiku];

impl ModelTier {
    pub fn parse(s: &str) -> Option<Self> {
        KNOWN_MODELS.iter().copied().find(|m| m.as_str() == s)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModelTier::Opus => "opus",
            ModelTier::Sonnet => "sonnet",
            ModelTier::Haiku => "haiku",
        }
    }

    /// Whether this is the premium tier counted against token budgets.
    pub fn is_top_tier(self) -> bool {
        matches!(self, Self::Opus)
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named cost tier for the whole team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenBudget {
    Premium,
    Balanced,
    Economic,
}

pub const KNOWN_BUDGETS: &[TokenBudget] = &[
    TokenBudget::Premium,
    TokenBudget::Balanced,
    TokenBudget::Economic,
];

impl TokenBudget {
    pub fn parse(s: &str) -> Option<Self> {
        KNOWN_BUDGETS.iter().copied().find(|b| b.as_str() == s)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenBudget::Premium => "premium",
            TokenBudget::Balanced => "balanced",
            TokenBudget::Economic => "economic",
        }
    }
}

/// Role-type keyword → recommended model. Matched as a substring of the
/// lowercased role type; the first entry that matches wins.
pub const MODEL_RECOMMENDATIONS: &[(&str, ModelTier)] = &[
    ("ceo", ModelTier::Opus),
    ("cto", ModelTier::Opus),
    ("product-owner", ModelTier::Opus),
    ("tech-lead", ModelTier::Opus),
    ("architect", ModelTier::Sonnet),
    ("developer", ModelTier::Sonnet),
    ("designer", ModelTier::Sonnet),
    ("qa", ModelTier::Sonnet),
    ("writer", ModelTier::Haiku),
    ("monitor", ModelTier::Haiku),
];

/// Recommendation when no keyword matches.
pub const DEFAULT_RECOMMENDATION: ModelTier = ModelTier::Sonnet;

/// Recommend a model for a free-text role type.
pub fn recommend_model(role_type: &str) -> ModelTier {
    let lowered = role_type.to_lowercase();
    MODEL_RECOMMENDATIONS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, model)| *model)
        .unwrap_or(DEFAULT_RECOMMENDATION)
}

/// Comma-separated list of names, used in remediation hints.
pub(crate) fn joined<T: Copy>(items: &[T], name: fn(T) -> &'static str) -> String {
    items.iter().map(|i| name(*i)).collect::<Vec<_>>().join(", ")
}
