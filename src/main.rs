use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use securemessage::config::{Config, OutputFormat};
use securemessage::output::{self, terminal};
use securemessage::pipeline::batch;
use securemessage::scoring::heuristic::HeuristicScorer;
use securemessage::scoring::traits::MessageScorer;

/// SecureMessage: heuristic spam and message risk scoring.
///
/// Scores free text against a fixed table of spam phrases and link, email,
/// and phone-number detectors.
#[derive(Parser)]
#[command(name = "securemessage", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single message
    Check {
        /// Message text (reads --file or stdin when omitted)
        message: Option<String>,

        /// Read the message from a file
        #[arg(long, conflicts_with = "message")]
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a file of messages, one per line
    Batch {
        /// Input file (reads stdin when omitted)
        path: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Only list messages flagged as spam
        #[arg(long)]
        only_spam: bool,
    },

    /// List the scoring rules and their weights
    Rules,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("securemessage=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let scorer = HeuristicScorer::default();

    match cli.command {
        Commands::Check {
            message,
            file,
            json,
        } => {
            let config = Config::load()?.with_json_flag(json);

            let message = match (message, file) {
                (Some(text), _) => text,
                (None, Some(path)) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?,
                (None, None) => read_stdin().await?,
            };
            debug!(chars = message.chars().count(), "Scoring message");

            let result = scorer.score(&message);

            match config.output_format {
                OutputFormat::Json => println!("{}", output::to_json(&result)?),
                OutputFormat::Terminal => {
                    terminal::display_score_result(&message, &result, config.preview_chars)
                }
            }
        }

        Commands::Batch {
            path,
            json,
            only_spam,
        } => {
            let config = Config::load()?.with_json_flag(json);

            let messages = match &path {
                Some(path) => {
                    info!(path = %path.display(), "Reading batch file");
                    let file = tokio::fs::File::open(path)
                        .await
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    batch::read_messages(file).await?
                }
                None => batch::read_messages(tokio::io::stdin()).await?,
            };

            // Only draw a progress bar for human output
            let progress = match config.output_format {
                OutputFormat::Terminal => Some(progress_bar(messages.len() as u64)),
                OutputFormat::Json => None,
            };

            let mut report = batch::run(&scorer, messages, progress.as_ref());
            if only_spam {
                report.retain_spam();
            }

            match config.output_format {
                OutputFormat::Json => println!("{}", output::to_json(&report)?),
                OutputFormat::Terminal => {
                    terminal::display_batch_report(&report, config.preview_chars)
                }
            }
        }

        Commands::Rules => {
            terminal::display_rules(scorer.rules());
        }
    }

    Ok(())
}

async fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("failed to read message from stdin")?;
    Ok(buf)
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    // Falls back to the default style if the template doesn't parse
    if let Ok(style) =
        ProgressStyle::default_bar().template("  Scoring [{bar:30}] {pos}/{len} ({eta})")
    {
        pb.set_style(style);
    }
    pb
}
