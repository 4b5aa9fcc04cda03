//! Property tests for classifier invariants.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use proptest::sample::select;

use inboxrank_core::classifier::{
    REASON_LOW_INDICATORS, REASON_MULTIPLE_INDICATORS, REASON_PRIMARY, REASON_SOCIAL_PROMOTIONAL,
    REASON_URGENT,
};
use inboxrank_core::{Classifier, EmailRecord, Priority};

const WORDS: &[&str] = &[
    "urgent", "interview", "deadline", "today", "asap", "meeting", "project", "budget",
    "birthday", "dinner", "family", "newsletter", "unsubscribe", "linkedin", "sale", "% off",
    "coupon", "invoice", "payment", "hello", "thanks", "RE:", "FW:", "REPORT", "update",
];

const SENDERS: &[&str] = &[
    "hr@company.com",
    "CEO <ceo@acme.io>",
    "news@linkedin.com",
    "alerts@mybank.com",
    "noreply@mailchimp.com",
    "someone@unknowndomain.test",
    "",
];

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
}

fn phrase() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(select(WORDS), 0..10).prop_map(|w| w.join(" ")),
        ".{0,80}",
    ]
}

fn email() -> impl Strategy<Value = EmailRecord> {
    (
        "[a-z0-9]{1,8}",
        phrase(),
        select(SENDERS),
        phrase(),
        prop::option::of(-24i64..24 * 20),
        any::<bool>(),
    )
        .prop_map(|(id, subject, from, snippet, hours_ago, is_read)| {
            let email = EmailRecord::new(id, subject, from, snippet).with_read(is_read);
            match hours_ago {
                Some(h) => email.with_received_at(now() - Duration::hours(h)),
                None => email.with_date("not a date"),
            }
        })
}

proptest! {
    #[test]
    fn confidence_is_bounded(email in email()) {
        let result = Classifier::default().classify(&email, now());
        prop_assert!((0.1..=0.99).contains(&result.confidence));
    }

    #[test]
    fn reason_agrees_with_band(email in email()) {
        let result = Classifier::default().classify(&email, now());
        let expected = match result.reason.as_str() {
            REASON_MULTIPLE_INDICATORS | REASON_URGENT => Priority::High,
            REASON_PRIMARY => Priority::Medium,
            REASON_LOW_INDICATORS | REASON_SOCIAL_PROMOTIONAL => Priority::Low,
            other => panic!("unexpected reason: {other}"),
        };
        prop_assert_eq!(result.priority, expected);
    }

    #[test]
    fn classification_is_deterministic(email in email()) {
        let classifier = Classifier::default();
        prop_assert_eq!(classifier.classify(&email, now()), classifier.classify(&email, now()));
    }

    #[test]
    fn groups_partition_the_batch(emails in prop::collection::vec(email(), 0..30)) {
        let classifier = Classifier::default();
        let results = classifier.classify_batch(&emails, now());
        let groups = classifier.group_by_priority(&emails, now());

        prop_assert_eq!(groups.len(), emails.len());
        for priority in Priority::ALL {
            let mut grouped: Vec<*const EmailRecord> = groups
                .get(priority)
                .iter()
                .map(|c| std::ptr::from_ref(c.email))
                .collect();
            let mut expected: Vec<*const EmailRecord> = emails
                .iter()
                .zip(&results)
                .filter(|(_, r)| r.priority == priority)
                .map(|(e, _)| std::ptr::from_ref(e))
                .collect();
            grouped.sort();
            expected.sort();
            prop_assert_eq!(grouped, expected);
        }
    }

    #[test]
    fn parallel_batch_matches_sequential(emails in prop::collection::vec(email(), 0..30)) {
        let classifier = Classifier::default();
        prop_assert_eq!(
            classifier.classify_batch_parallel(&emails, now()),
            classifier.classify_batch(&emails, now())
        );
    }

    #[test]
    fn stats_counts_add_up(emails in prop::collection::vec(email(), 0..30)) {
        let stats = Classifier::default().aggregate_stats(&emails, now());
        prop_assert_eq!(stats.high + stats.medium + stats.low, stats.total);
        prop_assert!(stats.top_keywords.len() <= 10);
        prop_assert!(stats.top_keywords.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
