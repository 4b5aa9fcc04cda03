//! Email record model.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sender::Sender;

/// An email as supplied by the mail-fetch collaborator.
///
/// Field names follow the dashboard's JSON (`isRead`), and every field
/// defaults when absent so partial records still classify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailRecord {
    /// Opaque message identifier.
    pub id: String,
    /// Message subject.
    pub subject: String,
    /// Raw `From` value, `Name <local@domain>` or a bare address.
    pub from: String,
    /// Preview text.
    pub snippet: String,
    /// Full plain-text body, when fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Receipt timestamp as delivered (RFC 2822, RFC 3339 or epoch millis).
    pub date: String,
    /// Whether the message has been read.
    pub is_read: bool,
}

impl EmailRecord {
    /// Creates an unread record with no body and no date.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        from: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            from: from.into(),
            snippet: snippet.into(),
            ..Self::default()
        }
    }

    /// Sets the raw date string.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Sets the date from a timestamp, stored as RFC 3339.
    #[must_use]
    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.date = received_at.to_rfc3339();
        self
    }

    /// Sets the full body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Marks the record as read or unread.
    #[must_use]
    pub const fn with_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    /// Text used for keyword matching: the body, falling back to the snippet.
    #[must_use]
    pub fn text(&self) -> &str {
        self.body.as_deref().unwrap_or(&self.snippet)
    }

    /// Parsed receipt time, or `None` when the date is missing or malformed.
    #[must_use]
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }

    /// Parsed sender.
    #[must_use]
    pub fn sender(&self) -> Sender {
        Sender::parse(&self.from)
    }
}

/// Offset-less date-time layouts, read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a message timestamp.
///
/// Accepts RFC 2822 (the `Date` header, with or without a trailing
/// `(UTC)`-style comment), RFC 3339, and integer epoch milliseconds
/// (Gmail `internalDate`). ISO date-times without an offset and bare
/// `YYYY-MM-DD` dates are read as UTC, the latter at midnight.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let header = strip_trailing_comment(raw);
    if let Ok(dt) = DateTime::parse_from_rfc2822(header) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

/// Drops a trailing `(comment)` such as `(UTC)` or `(PST)`.
fn strip_trailing_comment(raw: &str) -> &str {
    if raw.ends_with(')')
        && let Some(open) = raw.rfind('(')
    {
        return raw[..open].trim_end();
    }
    raw
}
