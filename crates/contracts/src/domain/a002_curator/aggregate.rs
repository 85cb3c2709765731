use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a001_registry::aggregate::RegistryKey;
use crate::domain::common::AggregateId;

/// Unique curator identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CuratorId(pub Uuid);

impl CuratorId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for CuratorId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CuratorId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// A curator of one registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curator {
    pub id: CuratorId,
    pub registry: RegistryKey,
    pub name: String,
    pub address: String,
}
