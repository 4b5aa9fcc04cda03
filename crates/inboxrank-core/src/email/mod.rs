//! Email records as consumed by the classifier.

mod model;
mod sender;

pub use model::{EmailRecord, parse_timestamp};
pub use sender::Sender;
