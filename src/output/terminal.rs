// Colored terminal output for verdicts, batch reports, and the rule table.
//
// main.rs display paths delegate here when the output format is Terminal.

use colored::Colorize;

use crate::pipeline::batch::BatchReport;
use crate::scoring::result::{RiskLevel, ScoreResult, HIGH_RISK_THRESHOLD, SPAM_THRESHOLD};
use crate::scoring::rules::RuleSet;

/// Display the verdict for a single message.
pub fn display_score_result(message: &str, result: &ScoreResult, preview_chars: usize) {
    println!("\n{}", "=== Message Risk ===".bold());
    println!(
        "  Message: {}",
        super::truncate_chars(message, preview_chars).dimmed()
    );
    println!(
        "  Risk: {}  (confidence {:.2}, raw {:.2})",
        colorize_level(result.risk_level),
        result.confidence,
        result.raw_score
    );
    let verdict = if result.is_spam {
        "spam".red().bold().to_string()
    } else {
        "not spam".green().to_string()
    };
    println!("  Verdict: {verdict}");
    println!("  Recommendation: {}", result.recommendation.bold());

    if result.detected_patterns.is_empty() {
        println!("  Patterns: {}", "none".dimmed());
    } else {
        println!("  Patterns: {}", result.detected_patterns.join(", "));
    }
}

/// Display a batch report: one row per entry, then the summary.
pub fn display_batch_report(report: &BatchReport, preview_chars: usize) {
    println!(
        "\n{}",
        format!("=== Batch Report ({} messages) ===", report.total()).bold()
    );
    println!();

    if report.entries.is_empty() {
        println!("  No messages to show.");
    } else {
        println!(
            "  {:>5}  {:<8} {:>5}  {}",
            "Line".dimmed(),
            "Risk".dimmed(),
            "Conf".dimmed(),
            "Message".dimmed(),
        );
        println!("  {}", "-".repeat(78).dimmed());

        for entry in &report.entries {
            println!(
                "  {:>5}  {:<8} {:>5.2}  {}",
                entry.line,
                colorize_level(entry.result.risk_level),
                entry.result.confidence,
                super::truncate_chars(&entry.message, preview_chars),
            );
        }
    }

    println!();
    if report.high > 0 {
        println!("  {} {} high risk", "!!".red().bold(), report.high);
    }
    if report.medium > 0 {
        println!("  {} {} medium risk", "!".yellow(), report.medium);
    }
    println!("  {} {} low risk", "~".green(), report.low);

    if !report.top_patterns.is_empty() {
        println!("\n  Most frequent patterns:");
        for pc in report.top_patterns.iter().take(5) {
            println!("    {:<20} {}", pc.pattern, pc.count);
        }
    }
    println!("\n  {}", format!("Scored at {}", report.scored_at).dimmed());
}

/// Display the rule table with weights.
pub fn display_rules(rules: &RuleSet) {
    println!(
        "\n{}",
        format!("=== Scoring Rules ({}) ===", rules.len()).bold()
    );
    println!();
    println!(
        "  {:<20} {:<8} {:>6}",
        "Label".dimmed(),
        "Kind".dimmed(),
        "Weight".dimmed()
    );
    println!("  {}", "-".repeat(36).dimmed());
    for rule in rules.rules() {
        println!(
            "  {:<20} {:<8} {:>6.2}",
            rule.label,
            rule.kind_name(),
            rule.weight()
        );
    }
    println!(
        "\n  {}",
        format!(
            "Spam above {SPAM_THRESHOLD:.2}, high risk above {HIGH_RISK_THRESHOLD:.2} (raw score)."
        )
        .dimmed()
    );
}

/// Colorize a risk level badge.
fn colorize_level(level: RiskLevel) -> colored::ColoredString {
    let label = level.as_str();
    match level {
        RiskLevel::High => label.red().bold(),
        RiskLevel::Medium => label.yellow(),
        RiskLevel::Low => label.green(),
    }
}
