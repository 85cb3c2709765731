use super::DataError;
use contracts::domain::a001_registry::aggregate::{CreateRegistryRequest, Registry, RegistryKey};
use contracts::domain::a002_curator::aggregate::Curator;
use contracts::domain::a003_claim::aggregate::ClaimList;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by every data source call. Runs on the browser's
/// single thread, so it is not required to be `Send`.
pub type DataFuture<T> = Pin<Box<dyn Future<Output = Result<T, DataError>>>>;

/// Everything the registry page needs from the outside world.
///
/// Implementations own their state; each call returns a `'static` future so
/// callers can hand it straight to `spawn_local`.
pub trait RegistryDataSource: Send + Sync {
    fn list_registries(&self) -> DataFuture<Vec<Registry>>;

    fn list_curators_for(&self, key: &RegistryKey) -> DataFuture<Vec<Curator>>;

    fn list_claims_for(&self, key: &RegistryKey) -> DataFuture<ClaimList>;

    fn create_registry(&self, request: CreateRegistryRequest) -> DataFuture<Registry>;
}

/// Data source handle passed to components and view models.
pub type SharedDataSource = Arc<dyn RegistryDataSource>;
