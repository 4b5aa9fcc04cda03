//! Command-line arguments.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use inboxrank_core::Priority;

/// Classify fetched emails into high/medium/low priority.
#[derive(Debug, Parser)]
#[command(name = "inboxrank", version, about)]
pub struct Cli {
    /// Classifier table file (JSON). Defaults to the user config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Age emails against this RFC 3339 instant instead of the system clock.
    #[arg(long, global = true, value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify every email and print one result per input.
    Classify {
        /// JSON array of email records, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
        /// Classify on all cores.
        #[arg(long)]
        parallel: bool,
        /// Only print emails in this band.
        #[arg(long, value_parser = parse_priority)]
        priority: Option<Priority>,
    },
    /// Group emails by band, newest first.
    Groups {
        /// JSON array of email records, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },
    /// Print batch statistics.
    Stats {
        /// JSON array of email records, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },
    /// Print unread high-priority emails for the notifier.
    Alerts {
        /// JSON array of email records, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },
    /// Print the effective classifier tables.
    Tables {
        /// Also save them to the config file, creating it if needed.
        #[arg(long)]
        write: bool,
    },
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    Priority::parse(s)
        .ok_or_else(|| format!("unknown priority `{s}` (expected high, medium or low)"))
}

fn parse_now(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp `{s}`: {e}"))
}
