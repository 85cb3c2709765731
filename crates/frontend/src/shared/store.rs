//! Registry list shared by the whole app.
//!
//! Provided once by `WithRoot` and handed to pages as an explicit prop; pages
//! only get a read-only view of the list plus the `refresh`/`create` actions.

use crate::shared::data::{DataError, Loadable, SharedDataSource, TrackedLoad};
use contracts::domain::a001_registry::aggregate::{CreateRegistryRequest, Registry};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct RegistryStore {
    registries: RwSignal<TrackedLoad<Vec<Registry>>>,
    source: StoredValue<SharedDataSource>,
}

impl RegistryStore {
    pub fn new(source: SharedDataSource) -> Self {
        Self {
            registries: RwSignal::new(TrackedLoad::default()),
            source: StoredValue::new(source),
        }
    }

    /// Read-only view of the registry list.
    pub fn registries(&self) -> Signal<Loadable<Vec<Registry>>> {
        let registries = self.registries;
        Signal::derive(move || registries.with(|load| load.value().clone()))
    }

    /// Reload the list in the background.
    pub fn refresh(&self) {
        spawn_local(self.reload());
    }

    /// Start a reload; the returned future stores the result. A response
    /// that arrives after a newer reload was started is dropped.
    fn reload(&self) -> impl Future<Output = ()> + 'static {
        let mut generation = 0;
        self.registries.update(|load| generation = load.begin());

        let request = self.source.with_value(|source| source.list_registries());
        let registries = self.registries;
        async move {
            let result = request.await;
            if let Err(e) = &result {
                log::error!("Failed to load registries: {}", e);
            }
            registries.try_update(|load| {
                if !load.finish(generation, result) {
                    log::warn!("Dropping stale registry list (generation {})", generation);
                }
            });
        }
    }

    /// Create a registry. On success the list is reloaded before this returns.
    pub async fn create(&self, request: CreateRegistryRequest) -> Result<Registry, DataError> {
        let pending = self.source.with_value(|source| source.create_registry(request));
        match pending.await {
            Ok(registry) => {
                log::info!("Registry '{}' created", registry.name);
                self.reload().await;
                Ok(registry)
            }
            Err(e) => {
                log::error!("Failed to create registry: {}", e);
                Err(e)
            }
        }
    }
}
