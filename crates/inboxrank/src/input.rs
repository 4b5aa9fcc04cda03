//! Reading email records.

use std::io::Read;

use anyhow::Context;
use inboxrank_core::EmailRecord;
use serde::Deserialize;
use tracing::debug;

/// Accepted input shapes: a bare array, or the dashboard's `{ "emails": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    List(Vec<EmailRecord>),
    Wrapped { emails: Vec<EmailRecord> },
}

/// Reads records from a file, or stdin when `source` is `-`.
pub fn read_emails(source: &str) -> anyhow::Result<Vec<EmailRecord>> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read emails from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read {source}"))?
    };

    let emails = parse_emails(&raw).with_context(|| format!("Invalid email records in {source}"))?;
    debug!(count = emails.len(), source, "Loaded emails");
    Ok(emails)
}

/// Parses records from JSON text.
pub fn parse_emails(raw: &str) -> anyhow::Result<Vec<EmailRecord>> {
    let emails = match serde_json::from_str::<Input>(raw)? {
        Input::List(emails) | Input::Wrapped { emails } => emails,
    };
    Ok(emails)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let emails = parse_emails(
            r#"[{"id":"1","subject":"Hi","from":"a@b.com","snippet":"x","date":"1768505503000","isRead":false}]"#,
        )
        .unwrap();

        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].from, "a@b.com");
        assert!(emails[0].received_at().is_some());
    }

    #[test]
    fn test_parse_wrapped() {
        let emails = parse_emails(r#"{"emails":[{"id":"1"},{"id":"2"}]}"#).unwrap();
        assert_eq!(emails.len(), 2);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_emails("{\"mail\": 3}").is_err());
        assert!(parse_emails("not json").is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_emails("/nonexistent/inbox.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/inbox.json"));
    }
}
