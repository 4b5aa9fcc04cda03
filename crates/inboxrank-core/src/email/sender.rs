//! Sender (`From`) parsing.

use serde::Serialize;

/// A parsed `From` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sender {
    /// Display name, if one was given.
    pub name: Option<String>,
    /// Address, lower-cased.
    pub address: String,
}

impl Sender {
    /// Parses `Name <local@domain>`, `"Name" <local@domain>`, `<local@domain>`
    /// or a bare address.
    #[must_use]
    pub fn parse(from: &str) -> Self {
        let from = from.trim();

        if let Some(start) = from.rfind('<')
            && let Some(end) = from.rfind('>')
            && end > start
        {
            let address = from[start + 1..end].trim().to_lowercase();
            let name = from[..start].trim().trim_matches('"').trim();
            return Self {
                name: (!name.is_empty()).then(|| name.to_string()),
                address,
            };
        }

        Self {
            name: None,
            address: from.to_lowercase(),
        }
    }

    /// Domain part of the address, empty when there is no `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.address
            .rsplit_once('@')
            .map_or("", |(_, domain)| domain)
    }

    /// Name to show in lists: the display name, else the address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.address)
    }
}
