//! Alert gating for the notification collaborator.
//!
//! Only unread, high-priority mail is handed on. Summarizing, delivering
//! and scheduling the alert happen elsewhere.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::classifier::Classifier;
use crate::email::EmailRecord;

/// A high-priority unread email, flattened for a notification summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Message identifier.
    pub id: String,
    /// Sender display name, falling back to the address.
    pub sender_name: String,
    /// Sender address.
    pub sender_address: String,
    /// Message subject.
    pub subject: String,
    /// Classification confidence.
    pub confidence: f64,
    /// Signal tags that fired.
    pub keywords: Vec<String>,
}

impl Classifier {
    /// Unread high-priority emails in input order.
    #[must_use]
    pub fn alert_candidates(&self, emails: &[EmailRecord], now: DateTime<Utc>) -> Vec<Alert> {
        let alerts: Vec<Alert> = emails
            .iter()
            .filter(|email| !email.is_read)
            .filter_map(|email| {
                let result = self.classify(email, now);
                result.is_high().then(|| {
                    let sender = email.sender();
                    Alert {
                        id: email.id.clone(),
                        sender_name: sender.display_name().to_string(),
                        sender_address: sender.address,
                        subject: email.subject.clone(),
                        confidence: result.confidence,
                        keywords: result.keywords,
                    }
                })
            })
            .collect();

        debug!(
            candidates = alerts.len(),
            scanned = emails.len(),
            "Selected alert candidates"
        );
        alerts
    }
}
