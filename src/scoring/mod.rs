// Message risk scoring — rule table, scorer trait, and the heuristic scorer.

pub mod heuristic;
pub mod result;
pub mod rules;
pub mod traits;

use std::sync::LazyLock;

use heuristic::HeuristicScorer;
use result::ScoreResult;
use traits::MessageScorer;

static DEFAULT_SCORER: LazyLock<HeuristicScorer> = LazyLock::new(HeuristicScorer::default);

/// Score a message with the built-in rule table.
pub fn score(message: &str) -> ScoreResult {
    DEFAULT_SCORER.score(message)
}
