//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::logging::LoggingConfig;

/// SplitLedger - settle up a group's shared expenses.
#[derive(Parser, Debug)]
#[command(name = "splitledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a ledger snapshot (JSON: config, participants, expenses)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Display currency code, overriding the snapshot's (e.g. USD, EUR)
    #[arg(short, long)]
    pub currency: Option<String>,

    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    #[must_use]
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: match self.log_format {
                LogFormat::Pretty => "pretty",
                LogFormat::Json => "json",
            }
            .into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON summary
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["splitledger", "--input", "group.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("group.json"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.currency.is_none());
        assert_eq!(cli.logging().level, "warn");
        assert_eq!(cli.logging().format, "pretty");
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "splitledger",
            "-i",
            "group.json",
            "--format",
            "json",
            "--currency",
            "usd",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.currency.as_deref(), Some("usd"));
        assert_eq!(cli.logging().level, "debug");
        assert_eq!(cli.logging().format, "json");
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["splitledger"]).is_err());
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(Cli::try_parse_from(["splitledger", "-i", "g.json", "-f", "xml"]).is_err());
    }
}
