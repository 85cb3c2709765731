//! In-memory `RegistryDataSource`.
//!
//! The page runs without a server: registries, curators and claims live in
//! this store, optionally seeded from `fixtures/seed.json`.

use super::{DataError, DataFuture, RegistryDataSource};
use contracts::domain::a001_registry::aggregate::{CreateRegistryRequest, Registry, RegistryKey};
use contracts::domain::a002_curator::aggregate::Curator;
use contracts::domain::a003_claim::aggregate::{ClaimList, RegistryClaims};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

const BUNDLED_SEED: &str = include_str!("../../../fixtures/seed.json");

/// Wire shape of a seed file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Seed {
    registries: Vec<Registry>,
    curators: Vec<Curator>,
    claims: Vec<RegistryClaims>,
}

#[derive(Debug, Default)]
struct Store {
    registries: Vec<Registry>,
    curators: HashMap<RegistryKey, Vec<Curator>>,
    claims: HashMap<RegistryKey, ClaimList>,
}

impl From<Seed> for Store {
    fn from(seed: Seed) -> Self {
        let mut curators: HashMap<RegistryKey, Vec<Curator>> = HashMap::new();
        for curator in seed.curators {
            curators
                .entry(curator.registry.clone())
                .or_default()
                .push(curator);
        }
        let claims = seed
            .claims
            .into_iter()
            .map(|c| (c.registry, c.list))
            .collect();

        Self {
            registries: seed.registries,
            curators,
            claims,
        }
    }
}

impl Store {
    fn contains(&self, key: &RegistryKey) -> bool {
        self.registries.iter().any(|r| r.key() == key)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryDataSource {
    store: Arc<RwLock<Store>>,
    latency_ms: u32,
}

impl InMemoryDataSource {
    /// An empty store.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store seeded from a JSON document shaped like `fixtures/seed.json`.
    pub fn from_seed_json(json: &str) -> Result<Self, DataError> {
        let seed: Seed = serde_json::from_str(json)
            .map_err(|e| DataError::Unavailable(format!("invalid seed: {}", e)))?;
        Ok(Self {
            store: Arc::new(RwLock::new(seed.into())),
            latency_ms: 0,
        })
    }

    /// Store seeded from the fixture bundled into the binary.
    pub fn bundled() -> Result<Self, DataError> {
        Self::from_seed_json(BUNDLED_SEED)
    }

    /// Delay every response by `latency_ms` milliseconds.
    pub fn with_latency(mut self, latency_ms: u32) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    fn read<T>(&self, f: impl FnOnce(&Store) -> Result<T, DataError>) -> Result<T, DataError> {
        let store = self
            .store
            .read()
            .map_err(|_| DataError::Unavailable("store lock poisoned".to_string()))?;
        f(&store)
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut Store) -> Result<T, DataError>,
    ) -> Result<T, DataError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| DataError::Unavailable("store lock poisoned".to_string()))?;
        f(&mut store)
    }

    fn respond<T: 'static>(&self, result: Result<T, DataError>) -> DataFuture<T> {
        let latency_ms = self.latency_ms;
        Box::pin(async move {
            if latency_ms > 0 {
                gloo_timers::future::TimeoutFuture::new(latency_ms).await;
            }
            result
        })
    }
}

impl RegistryDataSource for InMemoryDataSource {
    fn list_registries(&self) -> DataFuture<Vec<Registry>> {
        let result = self.read(|store| Ok(store.registries.clone()));
        self.respond(result)
    }

    fn list_curators_for(&self, key: &RegistryKey) -> DataFuture<Vec<Curator>> {
        log::debug!("memory source: curators for '{}'", key);
        let result = self.read(|store| {
            if !store.contains(key) {
                return Err(DataError::NotFound(key.to_string()));
            }
            Ok(store.curators.get(key).cloned().unwrap_or_default())
        });
        self.respond(result)
    }

    fn list_claims_for(&self, key: &RegistryKey) -> DataFuture<ClaimList> {
        log::debug!("memory source: claims for '{}'", key);
        let result = self.read(|store| {
            if !store.contains(key) {
                return Err(DataError::NotFound(key.to_string()));
            }
            Ok(store.claims.get(key).cloned().unwrap_or_default())
        });
        self.respond(result)
    }

    fn create_registry(&self, request: CreateRegistryRequest) -> DataFuture<Registry> {
        let result = request.validate().map_err(DataError::from).and_then(|key| {
            self.write(|store| {
                if store.contains(&key) {
                    return Err(DataError::Conflict(key.to_string()));
                }
                let registry = Registry::new(
                    key,
                    request.description.trim().to_string(),
                    chrono::Utc::now(),
                );
                store.registries.push(registry.clone());
                log::debug!("memory source: created registry '{}'", registry.name);
                Ok(registry)
            })
        });
        self.respond(result)
    }
}
