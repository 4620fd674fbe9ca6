// Message scorer trait — the seam for alternative scorers.
//
// The heuristic rule-table scorer is the only implementation today. Scoring
// is synchronous: a scorer must be a pure function of the message text.

use super::result::ScoreResult;

/// Trait for classifying a message's spam risk.
pub trait MessageScorer: Send + Sync {
    /// Score a single message. Must not panic for any input.
    fn score(&self, message: &str) -> ScoreResult;

    /// Score multiple messages, returning results in the same order.
    fn score_batch(&self, messages: &[String]) -> Vec<ScoreResult> {
        messages.iter().map(|m| self.score(m)).collect()
    }
}
