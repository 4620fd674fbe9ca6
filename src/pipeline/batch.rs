// Batch scoring — one message per input line.
//
// Reads lines from any async reader (a file or stdin), scores each
// non-blank line, and aggregates the verdicts into a report with counts
// per risk level and a ranking of the patterns that fired most often.

use std::collections::HashMap;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{debug, info};

use crate::scoring::result::{RiskLevel, ScoreResult};
use crate::scoring::traits::MessageScorer;

/// A scored line of input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    /// 1-based line number in the input
    pub line: usize,
    pub message: String,
    pub result: ScoreResult,
}

/// How often a pattern fired across the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternCount {
    pub pattern: String,
    pub count: usize,
}

/// Aggregated verdicts for a batch run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub spam: usize,
    /// Most frequent first; ties broken alphabetically
    pub top_patterns: Vec<PatternCount>,
    pub scored_at: String,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Entries flagged as spam, in input order.
    pub fn spam_entries(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| e.result.is_spam)
    }

    /// Drop non-spam entries. Counts are left as computed over the full batch.
    pub fn retain_spam(&mut self) {
        self.entries.retain(|e| e.result.is_spam);
    }
}

/// Read messages from `reader`, one per line, skipping blank lines.
///
/// Returns `(line_number, text)` pairs with 1-based line numbers counted
/// over all lines, blank ones included. Trailing `\r` is stripped.
pub async fn read_messages<R>(reader: R) -> Result<Vec<(usize, String)>>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut messages = Vec::new();
    let mut line_no = 0usize;

    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("failed to read input line {}", line_no + 1))?
    {
        line_no += 1;
        let text = line.trim_end_matches('\r');
        if text.trim().is_empty() {
            continue;
        }
        messages.push((line_no, text.to_string()));
    }

    debug!(lines = line_no, messages = messages.len(), "Read batch input");
    Ok(messages)
}

/// Score every message and build the report.
pub fn run(
    scorer: &dyn MessageScorer,
    messages: Vec<(usize, String)>,
    progress: Option<&ProgressBar>,
) -> BatchReport {
    let mut entries = Vec::with_capacity(messages.len());
    let mut pattern_counts: HashMap<String, usize> = HashMap::new();
    let (mut low, mut medium, mut high) = (0usize, 0usize, 0usize);

    for (line, message) in messages {
        let result = scorer.score(&message);

        match result.risk_level {
            RiskLevel::Low => low += 1,
            RiskLevel::Medium => medium += 1,
            RiskLevel::High => high += 1,
        }
        for pattern in &result.detected_patterns {
            *pattern_counts.entry(pattern.clone()).or_default() += 1;
        }

        debug!(
            line,
            risk = %result.risk_level,
            patterns = result.detected_patterns.len(),
            "Scored message"
        );
        entries.push(BatchEntry {
            line,
            message,
            result,
        });

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let spam = medium + high;
    info!(total = entries.len(), spam, high, medium, low, "Batch scored");

    BatchReport {
        entries,
        low,
        medium,
        high,
        spam,
        top_patterns: rank_patterns(pattern_counts),
        scored_at: chrono::Utc::now().to_rfc3339(),
    }
}

fn rank_patterns(counts: HashMap<String, usize>) -> Vec<PatternCount> {
    let mut ranked: Vec<PatternCount> = counts
        .into_iter()
        .map(|(pattern, count)| PatternCount { pattern, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pattern.cmp(&b.pattern)));
    ranked
}
