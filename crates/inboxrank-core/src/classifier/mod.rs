//! Email priority classification.
//!
//! A deterministic, weighted rule-based scorer. Each rule that fires adds to
//! an integer score and records a signal tag; the final score selects one of
//! three bands:
//!
//! | Score      | Band     |
//! |------------|----------|
//! | `>= 8`     | high     |
//! | `4..=7`    | high     |
//! | `0..=3`    | medium   |
//! | `-3..=-1`  | low      |
//! | `<= -4`    | low      |
//!
//! The two high and two low rows differ in reason text and confidence curve.
//!
//! Rules run in a fixed order: social, promotional, time urgency,
//! high-priority keywords, business (capped), personal (capped), sender
//! domain (first match only), low-priority keywords, important senders,
//! reply/forward marker, all-caps subject, message length, recency.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use inboxrank_core::{Classifier, ClassifierConfig, EmailRecord};
//!
//! let config = ClassifierConfig::from_json(r#"{"importantSenders": ["cfo"]}"#)?;
//! let classifier = Classifier::new(config)?;
//!
//! let email = EmailRecord::new("m1", "Q3 numbers", "CFO <cfo@acme.io>", "");
//! let result = classifier.classify(&email, Utc::now());
//! assert!(result.keywords.contains(&"important sender: cfo".to_string()));
//! # Ok::<(), inboxrank_core::Error>(())
//! ```

mod config;
mod engine;
mod model;
pub mod tables;

pub use config::{ClassifierConfig, DomainWeight};
pub use engine::{
    Classifier, REASON_LOW_INDICATORS, REASON_MULTIPLE_INDICATORS, REASON_PRIMARY,
    REASON_SOCIAL_PROMOTIONAL, REASON_URGENT,
};
pub use model::{ClassificationResult, Priority};
