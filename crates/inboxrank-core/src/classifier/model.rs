//! Classification data models.

use serde::{Deserialize, Serialize};

/// Priority band assigned to an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Deserves immediate attention; eligible for alerts.
    High,
    /// Standard primary-inbox mail.
    Medium,
    /// Social, promotional or automated mail.
    Low,
}

impl Priority {
    /// All bands, highest first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Parse from the lowercase string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Lowercase string form, as used in JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Assigned band.
    pub priority: Priority,
    /// Human-readable summary of the band decision.
    pub reason: String,
    /// Signal tags in the order the rules fired.
    pub keywords: Vec<String>,
    /// Self-reported certainty in `[0.1, 0.99]`.
    pub confidence: f64,
}

impl ClassificationResult {
    /// Whether the email landed in the high band.
    #[must_use]
    pub fn is_high(&self) -> bool {
        self.priority == Priority::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_high() {
        let result = |priority| ClassificationResult {
            priority,
            reason: String::new(),
            keywords: Vec::new(),
            confidence: 0.5,
        };

        assert!(result(Priority::High).is_high());
        assert!(!result(Priority::Medium).is_high());
        assert!(!result(Priority::Low).is_high());
    }

    #[test]
    fn test_priority_roundtrip() {
        for priority in Priority::ALL {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
    }

    #[test]
    fn test_priority_parse_lenient_case() {
        assert_eq!(Priority::parse(" HIGH "), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Priority::Medium).ok().as_deref(),
            Some("\"medium\"")
        );
    }
}
