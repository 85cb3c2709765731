use serde::{Deserialize, Serialize};

use crate::domain::a001_registry::aggregate::RegistryKey;

/// State of a claim record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Resolved,
}

impl ClaimStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Resolved => "resolved",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Resolved => "Resolved",
        }
    }
}

/// Competing claims on one subject that are decided together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRace {
    pub id: String,
    pub subject: String,
    pub candidates: Vec<String>,
    pub status: ClaimStatus,
}

/// Claims submitted as one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSet {
    pub id: String,
    pub submitter: String,
    pub claims: Vec<String>,
    pub status: ClaimStatus,
}

/// All claims of one registry, grouped into races and sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimList {
    #[serde(rename = "claimRaces")]
    pub claim_races: Vec<ClaimRace>,
    #[serde(rename = "claimSets")]
    pub claim_sets: Vec<ClaimSet>,
}

impl ClaimList {
    pub fn is_empty(&self) -> bool {
        self.claim_races.is_empty() && self.claim_sets.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.claim_races
            .iter()
            .filter(|r| r.status == ClaimStatus::Pending)
            .count()
            + self
                .claim_sets
                .iter()
                .filter(|s| s.status == ClaimStatus::Pending)
                .count()
    }
}

/// Claims of a registry as they are stored by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryClaims {
    pub registry: RegistryKey,
    #[serde(flatten)]
    pub list: ClaimList,
}
