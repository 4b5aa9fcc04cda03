//! `InboxRank` - email priority classifier for the Gmail dashboard.
//!
//! Reads fetched email records as JSON and prints classifications, band
//! groups, statistics or alert candidates as JSON on stdout. Logs go to
//! stderr.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod input;
mod settings;

use std::path::Path;

use clap::Parser;
use inboxrank_core::{Classifier, Clock, FixedClock, SystemClock};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inboxrank=info,inboxrank_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = match cli.now {
        Some(instant) => run(cli, &FixedClock::new(instant))?,
        None => run(cli, &SystemClock)?,
    };

    println!("{output}");
    Ok(())
}

/// Executes one subcommand and returns the pretty JSON it prints.
fn run(cli: Cli, clock: &impl Clock) -> anyhow::Result<String> {
    let now = clock.now();
    let config_path = cli.config.as_deref();

    let output = match cli.command {
        Command::Tables { write } => commands::tables(config_path, write)?,
        Command::Classify {
            input,
            parallel,
            priority,
        } => {
            let classifier = load_classifier(config_path)?;
            let emails = input::read_emails(&input)?;
            commands::classify(&classifier, &emails, now, parallel, priority)?
        }
        Command::Groups { input } => {
            commands::groups(&load_classifier(config_path)?, &input::read_emails(&input)?, now)?
        }
        Command::Stats { input } => {
            commands::stats(&load_classifier(config_path)?, &input::read_emails(&input)?, now)?
        }
        Command::Alerts { input } => {
            commands::alerts(&load_classifier(config_path)?, &input::read_emails(&input)?, now)?
        }
    };

    info!(%now, "Done");
    Ok(serde_json::to_string_pretty(&output)?)
}

fn load_classifier(config_path: Option<&Path>) -> anyhow::Result<Classifier> {
    Ok(Classifier::new(settings::load_config(config_path)?)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use inboxrank_core::ClassifierConfig;

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_tables_write_creates_missing_config() {
        let dir = std::env::temp_dir().join(format!("inboxrank-main-{}", std::process::id()));
        let path = dir.join("new").join("classifier.json");
        std::fs::remove_dir_all(&dir).ok();

        let cli = Cli::try_parse_from([
            "inboxrank",
            "--config",
            path.to_str().unwrap(),
            "tables",
            "--write",
        ])
        .unwrap();
        let output = run(cli, &clock()).unwrap();

        assert!(path.exists());
        let saved = ClassifierConfig::load(&path).unwrap();
        assert_eq!(saved, ClassifierConfig::default());
        assert_eq!(serde_json::from_str::<ClassifierConfig>(&output).unwrap(), saved);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_classify_with_missing_config_fails() {
        let cli = Cli::try_parse_from([
            "inboxrank",
            "--config",
            "/nonexistent/inboxrank/classifier.json",
            "classify",
        ])
        .unwrap();

        let err = run(cli, &clock()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load classifier tables"));
    }
}
