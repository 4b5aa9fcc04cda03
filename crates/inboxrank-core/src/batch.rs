//! Batch operations over many emails.
//!
//! Every operation here is a thin wrapper over [`Classifier::classify`] and
//! reads `now` once, so all emails in a batch are aged against the same
//! instant.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::classifier::{ClassificationResult, Classifier, Priority};
use crate::email::EmailRecord;

/// Number of tags reported in [`ClassificationStats::top_keywords`].
pub const TOP_KEYWORDS: usize = 10;

/// An email paired with its classification.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedEmail<'a> {
    /// The input record.
    pub email: &'a EmailRecord,
    /// Its classification.
    pub result: ClassificationResult,
}

/// Emails partitioned by band, newest first within each band.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriorityGroups<'a> {
    /// High-priority emails.
    pub high: Vec<ClassifiedEmail<'a>>,
    /// Medium-priority emails.
    pub medium: Vec<ClassifiedEmail<'a>>,
    /// Low-priority emails.
    pub low: Vec<ClassifiedEmail<'a>>,
}

impl<'a> PriorityGroups<'a> {
    /// The group for one band.
    #[must_use]
    pub fn get(&self, priority: Priority) -> &[ClassifiedEmail<'a>] {
        match priority {
            Priority::High => &self.high,
            Priority::Medium => &self.medium,
            Priority::Low => &self.low,
        }
    }

    const fn get_mut(&mut self, priority: Priority) -> &mut Vec<ClassifiedEmail<'a>> {
        match priority {
            Priority::High => &mut self.high,
            Priority::Medium => &mut self.medium,
            Priority::Low => &mut self.low,
        }
    }

    /// Total number of emails across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    /// Whether every group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How often a signal tag fired across a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    /// The signal tag.
    pub keyword: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Summary of a classified batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationStats {
    /// Number of emails.
    pub total: usize,
    /// High-priority count.
    pub high: usize,
    /// Medium-priority count.
    pub medium: usize,
    /// Low-priority count.
    pub low: usize,
    /// Mean confidence, `0.0` for an empty batch.
    pub average_confidence: f64,
    /// Most frequent tags, ties in first-seen order.
    pub top_keywords: Vec<KeywordCount>,
}

impl ClassificationStats {
    /// Summarizes already-computed results.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        let count = |p: Priority| results.iter().filter(|r| r.priority == p).count();

        let average_confidence = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.confidence).sum::<f64>() / results.len() as f64
        };

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut tallies: Vec<KeywordCount> = Vec::new();
        for keyword in results.iter().flat_map(|r| &r.keywords) {
            if let Some(&i) = index.get(keyword.as_str()) {
                tallies[i].count += 1;
            } else {
                index.insert(keyword, tallies.len());
                tallies.push(KeywordCount {
                    keyword: keyword.clone(),
                    count: 1,
                });
            }
        }
        // Stable, so equal counts keep first-seen order.
        tallies.sort_by_key(|t| Reverse(t.count));
        tallies.truncate(TOP_KEYWORDS);

        Self {
            total: results.len(),
            high: count(Priority::High),
            medium: count(Priority::Medium),
            low: count(Priority::Low),
            average_confidence,
            top_keywords: tallies,
        }
    }
}

impl Classifier {
    /// Classifies every email, one result per input in input order.
    #[must_use]
    pub fn classify_batch(
        &self,
        emails: &[EmailRecord],
        now: DateTime<Utc>,
    ) -> Vec<ClassificationResult> {
        emails.iter().map(|email| self.classify(email, now)).collect()
    }

    /// Same as [`classify_batch`](Self::classify_batch), spread over the
    /// rayon thread pool. Output order still matches input order.
    #[must_use]
    pub fn classify_batch_parallel(
        &self,
        emails: &[EmailRecord],
        now: DateTime<Utc>,
    ) -> Vec<ClassificationResult> {
        emails
            .par_iter()
            .map(|email| self.classify(email, now))
            .collect()
    }

    /// Pairs every email with its classification, in input order.
    #[must_use]
    pub fn classify_all<'a>(
        &self,
        emails: &'a [EmailRecord],
        now: DateTime<Utc>,
    ) -> Vec<ClassifiedEmail<'a>> {
        emails
            .iter()
            .map(|email| ClassifiedEmail {
                email,
                result: self.classify(email, now),
            })
            .collect()
    }

    /// Emails in `priority`, in original order.
    #[must_use]
    pub fn filter_by_priority<'a>(
        &self,
        emails: &'a [EmailRecord],
        priority: Priority,
        now: DateTime<Utc>,
    ) -> Vec<ClassifiedEmail<'a>> {
        self.classify_all(emails, now)
            .into_iter()
            .filter(|c| c.result.priority == priority)
            .collect()
    }

    /// Partitions emails by band, each group sorted newest first.
    ///
    /// The sort is stable; emails without a parseable date go last.
    #[must_use]
    pub fn group_by_priority<'a>(
        &self,
        emails: &'a [EmailRecord],
        now: DateTime<Utc>,
    ) -> PriorityGroups<'a> {
        let mut groups = PriorityGroups::default();
        for classified in self.classify_all(emails, now) {
            groups.get_mut(classified.result.priority).push(classified);
        }
        for priority in Priority::ALL {
            groups
                .get_mut(priority)
                .sort_by_cached_key(|c| Reverse(c.email.received_at()));
        }

        debug!(
            high = groups.high.len(),
            medium = groups.medium.len(),
            low = groups.low.len(),
            "Grouped emails by priority"
        );
        groups
    }

    /// Counts, mean confidence and most frequent tags for a batch.
    #[must_use]
    pub fn aggregate_stats(
        &self,
        emails: &[EmailRecord],
        now: DateTime<Utc>,
    ) -> ClassificationStats {
        let stats = ClassificationStats::from_results(&self.classify_batch(emails, now));
        debug!(
            total = stats.total,
            high = stats.high,
            medium = stats.medium,
            low = stats.low,
            "Aggregated classification stats"
        );
        stats
    }
}
