use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::AggregateId;
use crate::shared::error::ContractError;

/// Maximum length of a registry description accepted on create.
pub const DESCRIPTION_MAX_LEN: usize = 500;

// ============================================================================
// ID Type
// ============================================================================

/// Name of a registry. Registries are addressed by name, so the name doubles
/// as the key that scoped views (curators, claims) operate on.
///
/// Never empty: the only ways in are [`RegistryKey::new`] and serde, and both
/// reject blank input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryKey(String);

impl RegistryKey {
    pub fn new(value: &str) -> Result<Self, ContractError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ContractError::EmptyRegistryKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RegistryKey {
    type Error = ContractError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<RegistryKey> for String {
    fn from(key: RegistryKey) -> Self {
        key.0
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AggregateId for RegistryKey {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Self::new(s).map_err(|e| e.to_string())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A named collection managed by the application; the top-level entity of
/// the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    pub name: RegistryKey,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Registry {
    pub fn new(name: RegistryKey, description: String, created_at: DateTime<Utc>) -> Self {
        Self {
            name,
            description,
            created_at,
        }
    }

    pub fn key(&self) -> &RegistryKey {
        &self.name
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Parameters of the "Add Registry" form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRegistryRequest {
    pub name: String,
    pub description: String,
}

impl CreateRegistryRequest {
    /// Check the form and return the key the new registry will be stored under.
    pub fn validate(&self) -> Result<RegistryKey, ContractError> {
        let key = RegistryKey::new(&self.name)?;
        if self.description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(ContractError::invalid(
                "description",
                format!("at most {} characters", DESCRIPTION_MAX_LEN),
            ));
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_rejects_blank() {
        assert_eq!(RegistryKey::new(""), Err(ContractError::EmptyRegistryKey));
        assert_eq!(RegistryKey::new("   "), Err(ContractError::EmptyRegistryKey));
    }

    #[test]
    fn test_key_is_trimmed() {
        let key = RegistryKey::new("  R1 ").unwrap();
        assert_eq!(key.as_str(), "R1");
        assert_eq!(key.as_string(), "R1");
    }

    #[test]
    fn test_key_deserialize_validates() {
        let ok: RegistryKey = serde_json::from_str("\"R1\"").unwrap();
        assert_eq!(ok.as_str(), "R1");
        assert!(serde_json::from_str::<RegistryKey>("\"\"").is_err());
    }

    #[test]
    fn test_create_request_validation() {
        let req = CreateRegistryRequest {
            name: "Books".to_string(),
            description: "Rare books".to_string(),
        };
        assert_eq!(req.validate().unwrap().as_str(), "Books");

        let empty = CreateRegistryRequest::default();
        assert_eq!(empty.validate(), Err(ContractError::EmptyRegistryKey));

        let long = CreateRegistryRequest {
            name: "Books".to_string(),
            description: "x".repeat(DESCRIPTION_MAX_LEN + 1),
        };
        assert!(matches!(
            long.validate(),
            Err(ContractError::InvalidField { field: "description", .. })
        ));
    }
}
