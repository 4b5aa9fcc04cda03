//! Weighted rule-based priority scoring.

use chrono::{DateTime, Utc};
use tracing::{trace, warn};

use super::config::ClassifierConfig;
use super::model::{ClassificationResult, Priority};
use crate::Result;
use crate::email::EmailRecord;
use crate::time::Clock;

const SOCIAL_WEIGHT: i32 = -4;
const PROMOTIONAL_WEIGHT: i32 = -3;
const TIME_URGENCY_WEIGHT: i32 = 4;
const HIGH_PRIORITY_WEIGHT: i32 = 3;
const CRITICAL_WEIGHT: i32 = 5;
const BUSINESS_WEIGHT: i32 = 2;
const BUSINESS_CAP: i32 = 6;
const PERSONAL_WEIGHT: i32 = 1;
const PERSONAL_CAP: i32 = 3;
const LOW_PRIORITY_WEIGHT: i32 = -3;
const IMPORTANT_SENDER_WEIGHT: i32 = 3;
const CONVERSATION_WEIGHT: i32 = 2;
const ALL_CAPS_WEIGHT: i32 = 3;
const ALL_CAPS_MIN_LEN: usize = 10;
const BRIEF_MAX_LEN: usize = 50;
const DETAILED_MIN_LEN: usize = 1000;

const BASE_CONFIDENCE: f64 = 0.5;
const MIN_CONFIDENCE: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 0.99;

/// Reason for scores of 8 and above.
pub const REASON_MULTIPLE_INDICATORS: &str =
    "Gmail-style important: Multiple high-priority indicators";
/// Reason for scores from 4 to 7.
pub const REASON_URGENT: &str =
    "Gmail-style important: Contains urgent keywords or important sender";
/// Reason for scores of -4 and below.
pub const REASON_SOCIAL_PROMOTIONAL: &str =
    "Social/Promotional: LinkedIn invitations, promotions, or automated content";
/// Reason for scores from -3 to -1.
pub const REASON_LOW_INDICATORS: &str = "Social/Promotional: Low priority indicators detected";
/// Reason for scores from 0 to 3.
pub const REASON_PRIMARY: &str =
    "Primary: Standard email in primary inbox but not marked important";

/// Deterministic email priority classifier.
///
/// Holds an immutable, case-folded copy of its tables. Classification is a
/// pure function of the email, the tables and the supplied `now`, so one
/// classifier can be shared freely across threads.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use inboxrank_core::{Classifier, EmailRecord, Priority};
///
/// let classifier = Classifier::default();
/// let now = Utc::now();
/// let email = EmailRecord::new(
///     "m1",
///     "Urgent: Final Round Interview",
///     "hr@company.com",
///     "today at 2pm",
/// )
/// .with_received_at(now - Duration::minutes(30));
///
/// let result = classifier.classify(&email, now);
/// assert_eq!(result.priority, Priority::High);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    tables: ClassifierConfig,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            tables: ClassifierConfig::default().case_folded(),
        }
    }
}

/// Raw outcome of the scoring rules, before band mapping.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Evaluation {
    /// Integer score accumulated by every rule.
    pub score: i32,
    /// Tags in firing order.
    pub keywords: Vec<String>,
    /// Confidence accumulated while scanning. Replaced by the band's value.
    pub signal_confidence: f64,
    /// Last category label set while scanning. Replaced by the band's reason.
    pub provisional_reason: &'static str,
}

/// A priority band with its confidence and reason for a given score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Band {
    pub priority: Priority,
    pub confidence: f64,
    pub reason: &'static str,
}

impl Classifier {
    /// Builds a classifier from validated tables.
    ///
    /// # Errors
    ///
    /// Returns an error if a table contains a blank entry.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tables: config.case_folded(),
        })
    }

    /// The case-folded tables in use.
    #[must_use]
    pub const fn tables(&self) -> &ClassifierConfig {
        &self.tables
    }

    /// Classifies an email, ageing it against `now`.
    #[must_use]
    pub fn classify(&self, email: &EmailRecord, now: DateTime<Utc>) -> ClassificationResult {
        let evaluation = self.evaluate(email, now);
        let band = band_for_score(evaluation.score);

        trace!(
            id = %email.id,
            score = evaluation.score,
            signal_confidence = evaluation.signal_confidence,
            provisional_reason = evaluation.provisional_reason,
            priority = %band.priority,
            "Classified email"
        );

        ClassificationResult {
            priority: band.priority,
            reason: band.reason.to_string(),
            keywords: evaluation.keywords,
            confidence: band.confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
        }
    }

    /// Classifies an email, reading `now` from `clock`.
    #[must_use]
    pub fn classify_now(&self, email: &EmailRecord, clock: &impl Clock) -> ClassificationResult {
        self.classify(email, clock.now())
    }

    /// Runs every scoring rule in order.
    pub(crate) fn evaluate(&self, email: &EmailRecord, now: DateTime<Utc>) -> Evaluation {
        let t = &self.tables;
        let content = format!("{} {}", email.subject, email.text()).to_lowercase();
        let from_lower = email.from.to_lowercase();

        let mut score = 0;
        let mut keywords = Vec::new();
        let mut confidence = BASE_CONFIDENCE;
        let mut reason = "";

        for pattern in matches(&t.social_patterns, &content) {
            score += SOCIAL_WEIGHT;
            keywords.push(format!("social: {pattern}"));
            confidence += 0.1;
            reason = "Social network notification";
        }

        for pattern in matches(&t.promotional_patterns, &content) {
            score += PROMOTIONAL_WEIGHT;
            keywords.push(format!("promotional: {pattern}"));
            confidence += 0.1;
            reason = "Promotional content";
        }

        for keyword in matches(&t.time_based_urgency_keywords, &content) {
            score += TIME_URGENCY_WEIGHT;
            keywords.push(format!("time-sensitive: {keyword}"));
            confidence += 0.1;
        }

        for keyword in matches(&t.high_priority_keywords, &content) {
            score += if t.critical_keywords.iter().any(|c| c == keyword) {
                CRITICAL_WEIGHT
            } else {
                HIGH_PRIORITY_WEIGHT
            };
            keywords.push(keyword.to_string());
            confidence += 0.05;
        }

        let mut business = 0;
        for keyword in matches(&t.business_keywords, &content) {
            business += BUSINESS_WEIGHT;
            keywords.push(format!("business: {keyword}"));
        }
        score += business.min(BUSINESS_CAP);

        let mut personal = 0;
        for keyword in matches(&t.personal_keywords, &content) {
            personal += PERSONAL_WEIGHT;
            keywords.push(format!("personal: {keyword}"));
        }
        score += personal.min(PERSONAL_CAP);

        let email_domain = from_lower.split('@').nth(1).unwrap_or("");
        if let Some(entry) = t
            .domain_importance_map
            .iter()
            .find(|e| email_domain.contains(&e.domain) || from_lower.contains(&e.domain))
        {
            score += entry.weight;
            keywords.push(format!("domain: {}", entry.domain));
            if entry.weight > 0 {
                confidence += 0.1;
            } else {
                confidence -= 0.1;
            }
        }

        for keyword in matches(&t.low_priority_keywords, &content) {
            score += LOW_PRIORITY_WEIGHT;
            keywords.push(format!("low-priority: {keyword}"));
            confidence += 0.05;
        }

        for sender in matches(&t.important_senders, &from_lower) {
            score += IMPORTANT_SENDER_WEIGHT;
            keywords.push(format!("important sender: {sender}"));
            confidence += 0.1;
        }

        if email.subject.contains("RE:") || email.subject.contains("FW:") {
            score += CONVERSATION_WEIGHT;
            keywords.push("ongoing conversation".to_string());
        }

        let subject = email.subject.trim();
        if subject == subject.to_uppercase() && subject.chars().count() > ALL_CAPS_MIN_LEN {
            score += ALL_CAPS_WEIGHT;
            keywords.push("all caps subject".to_string());
            confidence += 0.1;
        }

        let length = content.chars().count();
        if length < BRIEF_MAX_LEN {
            score += 1;
            keywords.push("brief message".to_string());
        } else if length > DETAILED_MIN_LEN {
            score += 2;
            keywords.push("detailed message".to_string());
        }

        match email.received_at() {
            Some(received) => {
                let hours_old = hours_between(received, now);
                if hours_old < 1.0 {
                    score += 2;
                    keywords.push("very recent".to_string());
                } else if hours_old < 4.0 {
                    score += 1;
                    keywords.push("recent".to_string());
                } else if hours_old > 72.0 {
                    score -= 1;
                }
            }
            None if !email.date.trim().is_empty() => {
                warn!(id = %email.id, date = %email.date, "Unparseable date, skipping recency");
            }
            None => {}
        }

        Evaluation {
            score,
            keywords,
            signal_confidence: confidence,
            provisional_reason: reason,
        }
    }
}

/// Patterns from `table` that occur in `haystack`, in table order.
fn matches<'a>(table: &'a [String], haystack: &'a str) -> impl Iterator<Item = &'a str> {
    table
        .iter()
        .map(String::as_str)
        .filter(move |pattern| haystack.contains(pattern))
}

#[allow(clippy::cast_precision_loss)]
fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}

/// Maps a score to its band. Thresholds are checked top to bottom.
pub(crate) fn band_for_score(score: i32) -> Band {
    let s = f64::from(score);

    if score >= 8 {
        Band {
            priority: Priority::High,
            confidence: (0.7 + (s - 8.0) * 0.05).min(0.95),
            reason: REASON_MULTIPLE_INDICATORS,
        }
    } else if score >= 4 {
        Band {
            priority: Priority::High,
            confidence: (0.6 + (s - 4.0) * 0.05).min(0.85),
            reason: REASON_URGENT,
        }
    } else if score <= -4 {
        Band {
            priority: Priority::Low,
            confidence: (0.6 + (s + 4.0).abs() * 0.05).min(0.9),
            reason: REASON_SOCIAL_PROMOTIONAL,
        }
    } else if score <= -1 {
        Band {
            priority: Priority::Low,
            confidence: (0.5 + (s + 1.0).abs() * 0.1).min(0.8),
            reason: REASON_LOW_INDICATORS,
        }
    } else {
        Band {
            priority: Priority::Medium,
            confidence: (0.5 + s.abs() * 0.05).clamp(0.4, 0.7),
            reason: REASON_PRIMARY,
        }
    }
}
