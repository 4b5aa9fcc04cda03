//! Subcommand execution.

use std::path::Path;

use chrono::{DateTime, Utc};
use inboxrank_core::{ClassificationResult, Classifier, ClassifierConfig, EmailRecord, Priority};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::settings;

/// One line of `classify` output.
#[derive(Debug, Serialize)]
struct ClassifiedRow<'a> {
    id: &'a str,
    #[serde(flatten)]
    result: &'a ClassificationResult,
}

/// Classifies `emails`, optionally in parallel and filtered to one band.
pub fn classify(
    classifier: &Classifier,
    emails: &[EmailRecord],
    now: DateTime<Utc>,
    parallel: bool,
    priority: Option<Priority>,
) -> anyhow::Result<Value> {
    let results = if parallel {
        classifier.classify_batch_parallel(emails, now)
    } else {
        classifier.classify_batch(emails, now)
    };

    let rows: Vec<ClassifiedRow<'_>> = emails
        .iter()
        .zip(&results)
        .filter(|(_, result)| priority.is_none_or(|p| result.priority == p))
        .map(|(email, result)| ClassifiedRow {
            id: &email.id,
            result,
        })
        .collect();

    info!(classified = results.len(), printed = rows.len(), parallel, "Classified emails");
    Ok(serde_json::to_value(rows)?)
}

/// Band groups, newest first.
pub fn groups(
    classifier: &Classifier,
    emails: &[EmailRecord],
    now: DateTime<Utc>,
) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(classifier.group_by_priority(emails, now))?)
}

/// Aggregate statistics.
pub fn stats(
    classifier: &Classifier,
    emails: &[EmailRecord],
    now: DateTime<Utc>,
) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(classifier.aggregate_stats(emails, now))?)
}

/// Alert candidates.
pub fn alerts(
    classifier: &Classifier,
    emails: &[EmailRecord],
    now: DateTime<Utc>,
) -> anyhow::Result<Value> {
    let alerts = classifier.alert_candidates(emails, now);
    info!(count = alerts.len(), "Alert candidates");
    Ok(serde_json::to_value(alerts)?)
}

/// Effective tables, optionally saved to the config file.
///
/// With `write`, a config file that does not exist yet is created from the
/// built-in tables instead of failing the load.
pub fn tables(explicit: Option<&Path>, write: bool) -> anyhow::Result<Value> {
    let path = explicit.map_or_else(settings::default_config_path, Path::to_path_buf);

    let config = if write && !path.exists() {
        ClassifierConfig::default()
    } else {
        settings::load_config(explicit)?
    };

    if write {
        settings::save_config(&config, &path)?;
    }
    Ok(serde_json::to_value(&config)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn inbox() -> Vec<EmailRecord> {
        vec![
            EmailRecord::new("a", "Urgent interview", "hr@company.com", "today")
                .with_received_at(now() - Duration::minutes(20)),
            EmailRecord::new("b", "Weekly newsletter", "news@linkedin.com", "")
                .with_received_at(now() - Duration::days(4)),
            EmailRecord::new("c", "Lunch?", "pal@example.org", "")
                .with_received_at(now() - Duration::hours(8)),
        ]
    }

    #[test]
    fn test_classify_rows_are_flat() {
        let emails = inbox();
        let value = classify(&Classifier::default(), &emails, now(), false, None).unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["id"], "a");
        assert_eq!(rows[0]["priority"], "high");
        assert_eq!(rows[1]["priority"], "low");
        assert_eq!(rows[2]["priority"], "medium");
        assert!(rows[0]["confidence"].is_f64());
    }

    #[test]
    fn test_classify_filter_and_parallel() {
        let emails = inbox();
        let value = classify(
            &Classifier::default(),
            &emails,
            now(),
            true,
            Some(Priority::Low),
        )
        .unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "b");
    }

    #[test]
    fn test_groups_shape() {
        let emails = inbox();
        let value = groups(&Classifier::default(), &emails, now()).unwrap();

        assert_eq!(value["high"][0]["email"]["id"], "a");
        assert_eq!(value["medium"][0]["email"]["id"], "c");
        assert_eq!(value["low"][0]["result"]["priority"], "low");
    }

    #[test]
    fn test_stats_shape() {
        let emails = inbox();
        let value = stats(&Classifier::default(), &emails, now()).unwrap();

        assert_eq!(value["total"], 3);
        assert_eq!(value["high"], 1);
        assert!(value["averageConfidence"].is_f64());
        assert!(value["topKeywords"].is_array());
    }

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("inboxrank-commands-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_tables_write_keeps_existing_file() {
        let path = scratch_path("existing/classifier.json");
        let custom = ClassifierConfig {
            important_senders: vec!["cfo".to_string()],
            ..ClassifierConfig::default()
        };
        settings::save_config(&custom, &path).unwrap();

        let value = tables(Some(&path), true).unwrap();
        assert_eq!(value["importantSenders"][0], "cfo");
        assert_eq!(ClassifierConfig::load(&path).unwrap(), custom);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_tables_without_write_requires_explicit_file() {
        let path = scratch_path("absent/classifier.json");
        assert!(tables(Some(&path), false).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_alerts_shape() {
        let emails = inbox();
        let value = alerts(&Classifier::default(), &emails, now()).unwrap();

        let alerts = value.as_array().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0]["senderAddress"], "hr@company.com");
    }
}
