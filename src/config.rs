use std::env;

use anyhow::{Context, Result};

/// Default number of characters of a message shown in terminal previews.
pub const DEFAULT_PREVIEW_CHARS: usize = 80;

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored human-readable output (default)
    Terminal,
    /// Pretty-printed JSON, one document per command
    Json,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so any of
/// these can live there instead of the shell environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// SECUREMESSAGE_OUTPUT: "terminal" (default) or "json"
    pub output_format: OutputFormat,
    /// SECUREMESSAGE_PREVIEW_CHARS: message preview length in terminal output
    pub preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Terminal,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. `load` passes the
    /// process environment; tests pass a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = match lookup("SECUREMESSAGE_OUTPUT").as_deref() {
            Some("json") => OutputFormat::Json,
            Some("terminal") | Some("") | None => OutputFormat::Terminal,
            Some(other) => anyhow::bail!(
                "SECUREMESSAGE_OUTPUT must be \"terminal\" or \"json\", got \"{other}\""
            ),
        };

        let preview_chars = match lookup("SECUREMESSAGE_PREVIEW_CHARS") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("SECUREMESSAGE_PREVIEW_CHARS is not a number: {raw}"))?,
            _ => DEFAULT_PREVIEW_CHARS,
        };

        let config = Self {
            output_format,
            preview_chars,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make output useless.
    pub fn validate(&self) -> Result<()> {
        if self.preview_chars == 0 {
            anyhow::bail!("SECUREMESSAGE_PREVIEW_CHARS must be greater than zero");
        }
        Ok(())
    }

    /// Apply the `--json` command-line flag, which wins over the environment.
    pub fn with_json_flag(mut self, json: bool) -> Self {
        if json {
            self.output_format = OutputFormat::Json;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.output_format, OutputFormat::Terminal);
        assert_eq!(config.preview_chars, DEFAULT_PREVIEW_CHARS);
    }

    #[test]
    fn test_json_output_and_preview() {
        let config = Config::from_lookup(lookup_from(&[
            ("SECUREMESSAGE_OUTPUT", "json"),
            ("SECUREMESSAGE_PREVIEW_CHARS", " 40 "),
        ]))
        .unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.preview_chars, 40);
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        let err =
            Config::from_lookup(lookup_from(&[("SECUREMESSAGE_OUTPUT", "xml")])).unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_bad_preview_chars_is_rejected() {
        let not_a_number = lookup_from(&[("SECUREMESSAGE_PREVIEW_CHARS", "lots")]);
        assert!(Config::from_lookup(not_a_number).is_err());
        let zero = lookup_from(&[("SECUREMESSAGE_PREVIEW_CHARS", "0")]);
        assert!(Config::from_lookup(zero).is_err());
    }

    #[test]
    fn test_json_flag_overrides_environment() {
        let config = Config::default().with_json_flag(true);
        assert_eq!(config.output_format, OutputFormat::Json);
        let config = Config::default().with_json_flag(false);
        assert_eq!(config.output_format, OutputFormat::Terminal);
    }
}
