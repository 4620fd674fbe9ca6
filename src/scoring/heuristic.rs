// Heuristic scorer — sums the weights of every rule that fires.
//
// Each rule contributes at most once per message, however many times its
// phrase or pattern occurs. The raw sum drives the risk level; only the
// reported confidence is clamped.

use super::result::ScoreResult;
use super::rules::{points_to_score, RuleSet};
use super::traits::MessageScorer;

/// Rule-table scorer. `Default` uses the built-in table.
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    rules: RuleSet,
}

impl HeuristicScorer {
    /// Scorer over a custom rule table.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl MessageScorer for HeuristicScorer {
    fn score(&self, message: &str) -> ScoreResult {
        let lowered = message.to_lowercase();

        let mut points: u32 = 0;
        let mut detected: Vec<String> = Vec::new();

        for rule in self.rules.rules() {
            if !rule.matches(message, &lowered) {
                continue;
            }
            // Custom tables may repeat a label; count and report it once.
            if detected.iter().any(|label| label == &rule.label) {
                continue;
            }
            points = points.saturating_add(rule.points);
            detected.push(rule.label.clone());
        }

        ScoreResult::from_raw(points_to_score(points), detected)
    }
}
