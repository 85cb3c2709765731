use crate::shared::store::RegistryStore;
use contracts::domain::a001_registry::aggregate::{CreateRegistryRequest, Registry};

/// Validate locally, then create through the store.
pub async fn submit(store: RegistryStore, request: CreateRegistryRequest) -> Result<Registry, String> {
    request.validate().map_err(|e| e.to_string())?;
    store.create(request).await.map_err(|e| e.to_string())
}
