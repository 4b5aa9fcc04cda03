//! Classifier configuration tables.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::tables;
use crate::{Error, Result};

/// A sender-domain substring and its score adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainWeight {
    /// Substring matched against the sender.
    pub domain: String,
    /// Score adjustment when this entry is the first to match.
    pub weight: i32,
}

impl DomainWeight {
    /// Creates a new entry.
    #[must_use]
    pub fn new(domain: impl Into<String>, weight: i32) -> Self {
        Self {
            domain: domain.into(),
            weight,
        }
    }
}

/// The keyword and domain tables the classifier scores against.
///
/// Tables missing from a JSON file fall back to the built-in defaults, so a
/// file only needs the tables it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassifierConfig {
    /// Urgency and action keywords.
    pub high_priority_keywords: Vec<String>,
    /// High-priority keywords that carry the elevated weight.
    pub critical_keywords: Vec<String>,
    /// Newsletter and bulk-mail keywords.
    pub low_priority_keywords: Vec<String>,
    /// Social-network notification phrases.
    pub social_patterns: Vec<String>,
    /// Marketing phrases.
    pub promotional_patterns: Vec<String>,
    /// Time-pressure phrases.
    pub time_based_urgency_keywords: Vec<String>,
    /// Professional-context keywords.
    pub business_keywords: Vec<String>,
    /// Personal-life keywords.
    pub personal_keywords: Vec<String>,
    /// Substrings of important senders.
    pub important_senders: Vec<String>,
    /// Ordered domain weights, first match wins.
    pub domain_importance_map: Vec<DomainWeight>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            high_priority_keywords: owned(tables::HIGH_PRIORITY_KEYWORDS),
            critical_keywords: owned(tables::CRITICAL_KEYWORDS),
            low_priority_keywords: owned(tables::LOW_PRIORITY_KEYWORDS),
            social_patterns: owned(tables::SOCIAL_PATTERNS),
            promotional_patterns: owned(tables::PROMOTIONAL_PATTERNS),
            time_based_urgency_keywords: owned(tables::TIME_URGENCY_KEYWORDS),
            business_keywords: owned(tables::BUSINESS_KEYWORDS),
            personal_keywords: owned(tables::PERSONAL_KEYWORDS),
            important_senders: owned(tables::IMPORTANT_SENDERS),
            domain_importance_map: tables::DOMAIN_IMPORTANCE
                .iter()
                .map(|&(domain, weight)| DomainWeight::new(domain, weight))
                .collect(),
        }
    }
}

impl ClassifierConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a table is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or a
    /// table is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        debug!(?path, "Loaded classifier tables");
        Ok(config)
    }

    /// Serializes the tables as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every table entry is usable.
    ///
    /// A blank pattern is a substring of every email and would fire on all
    /// of them, so it is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTable`] naming the first offending table.
    pub fn validate(&self) -> Result<()> {
        let lists: [(&'static str, &[String]); 9] = [
            ("highPriorityKeywords", self.high_priority_keywords.as_slice()),
            ("criticalKeywords", self.critical_keywords.as_slice()),
            ("lowPriorityKeywords", self.low_priority_keywords.as_slice()),
            ("socialPatterns", self.social_patterns.as_slice()),
            ("promotionalPatterns", self.promotional_patterns.as_slice()),
            ("timeBasedUrgencyKeywords", self.time_based_urgency_keywords.as_slice()),
            ("businessKeywords", self.business_keywords.as_slice()),
            ("personalKeywords", self.personal_keywords.as_slice()),
            ("importantSenders", self.important_senders.as_slice()),
        ];

        for (table, entries) in lists {
            if let Some(index) = entries.iter().position(|e| e.trim().is_empty()) {
                return Err(Error::InvalidTable {
                    table,
                    reason: format!("entry {index} is blank"),
                });
            }
        }

        if let Some(index) = self
            .domain_importance_map
            .iter()
            .position(|e| e.domain.trim().is_empty())
        {
            return Err(Error::InvalidTable {
                table: "domainImportanceMap",
                reason: format!("entry {index} has a blank domain"),
            });
        }

        for critical in &self.critical_keywords {
            let listed = self
                .high_priority_keywords
                .iter()
                .any(|k| k.eq_ignore_ascii_case(critical));
            if !listed {
                warn!(
                    keyword = %critical,
                    "Critical keyword is not a high-priority keyword and will never fire"
                );
            }
        }

        Ok(())
    }

    /// Lower-cases every pattern so matching runs against folded text.
    #[must_use]
    pub(crate) fn case_folded(mut self) -> Self {
        for list in [
            &mut self.high_priority_keywords,
            &mut self.critical_keywords,
            &mut self.low_priority_keywords,
            &mut self.social_patterns,
            &mut self.promotional_patterns,
            &mut self.time_based_urgency_keywords,
            &mut self.business_keywords,
            &mut self.personal_keywords,
            &mut self.important_senders,
        ] {
            for entry in list.iter_mut() {
                *entry = entry.to_lowercase();
            }
        }
        for entry in &mut self.domain_importance_map {
            entry.domain = entry.domain.to_lowercase();
        }
        self
    }
}
