// Score result types — what a scorer hands back to its caller.
//
// The JSON shape (camelCase field names, lowercase risk level) is what
// front-end code consumes to render a risk badge, so renames here are
// breaking changes.

use serde::{Deserialize, Serialize};

/// Raw score above which a message is high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.6;

/// Raw score above which a message is medium risk and counts as spam.
pub const SPAM_THRESHOLD: f64 = 0.3;

/// Coarse risk bucket derived from the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Determine the level from the raw (unclamped) score.
    ///
    /// Both thresholds are strict: a score of exactly 0.3 is still `Low`.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s > HIGH_RISK_THRESHOLD => RiskLevel::High,
            s if s > SPAM_THRESHOLD => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Advice shown next to the risk badge.
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Safe to read",
            RiskLevel::Medium => "Review carefully",
            RiskLevel::High => "Delete immediately",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The verdict for a single message. Built fresh per call, never mutated.
///
/// Serialize-only: `raw_score` is not in the JSON, so a decoded value could
/// not be rebuilt faithfully.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub is_spam: bool,
    /// Raw score clamped to [0, 1]
    pub confidence: f64,
    pub risk_level: RiskLevel,
    /// Keyword phrases and detector labels that fired, each at most once,
    /// in the order they were detected
    pub detected_patterns: Vec<String>,
    pub recommendation: String,
    /// Unclamped sum of rule weights. Thresholds are checked against this,
    /// not against `confidence`. Not part of the JSON shape.
    #[serde(skip)]
    pub raw_score: f64,
}

impl ScoreResult {
    /// Build a result from the raw score and the labels that produced it.
    pub fn from_raw(raw_score: f64, detected_patterns: Vec<String>) -> Self {
        let risk_level = RiskLevel::from_score(raw_score);
        Self {
            is_spam: raw_score > SPAM_THRESHOLD,
            confidence: raw_score.clamp(0.0, 1.0),
            risk_level,
            detected_patterns,
            recommendation: risk_level.recommendation().to_string(),
            raw_score,
        }
    }
}
