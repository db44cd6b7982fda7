//! Human-readable, role-prefixed account identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::Role;

/// Health ID such as `HL-PNT01` or `HL-DCT123`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthId(String);

impl HealthId {
    /// Formats `<prefix><seq>` with the sequence padded to at least two digits
    pub fn format(role: Role, sequence: u64) -> Self {
        Self(format!("{}{:02}", role.health_id_prefix(), sequence))
    }

    /// Role encoded in the prefix, if any
    pub fn role(&self) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| self.0.starts_with(role.health_id_prefix()))
    }

    /// Whether a string has the shape of a health ID
    pub fn looks_like(value: &str) -> bool {
        Role::ALL.iter().any(|role| {
            value
                .strip_prefix(role.health_id_prefix())
                .map(|digits| digits.len() >= 2 && digits.chars().all(|c| c.is_ascii_digit()))
                .unwrap_or(false)
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for HealthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<HealthId> for String {
    fn from(id: HealthId) -> Self {
        id.0
    }
}
