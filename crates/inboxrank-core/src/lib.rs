//! # inboxrank-core
//!
//! Email priority classification for the `InboxRank` Gmail dashboard.
//!
//! This crate provides:
//! - **Classifier** - deterministic weighted-rule scoring into high/medium/low
//! - **Configuration tables** - keyword, sender and domain tables, loadable from JSON
//! - **Email records** - the fetched-mail model, sender and timestamp parsing
//! - **Batch operations** - sequential and parallel classification, grouping, statistics
//! - **Alert gating** - unread high-priority mail for the notification collaborator
//!
//! Fetching mail, OAuth, message delivery and summarization live outside this
//! crate; they exchange plain [`EmailRecord`] and [`ClassificationResult`]
//! values with it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod alert;
pub mod batch;
pub mod classifier;
pub mod email;
mod error;
pub mod time;

pub use alert::Alert;
pub use batch::{ClassificationStats, ClassifiedEmail, KeywordCount, PriorityGroups};
pub use classifier::{ClassificationResult, Classifier, ClassifierConfig, DomainWeight, Priority};
pub use email::{EmailRecord, Sender};
pub use error::{Error, Result};
pub use time::{Clock, FixedClock, SystemClock};
