//! Root wrapper of the application.
//!
//! Wraps children in thaw's `ConfigProvider` (library default theme) and
//! provides the app-wide services:
//! - `Config` (see `shared::config`)
//! - `SharedDataSource`
//! - `RegistryStore`

use crate::shared::config::{load_config, Config};
use crate::shared::data::{InMemoryDataSource, SharedDataSource};
use crate::shared::store::RegistryStore;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::ConfigProvider;

/// Build the data source described by `config`.
pub fn build_data_source(config: &Config) -> SharedDataSource {
    let source = if config.data.seed {
        InMemoryDataSource::bundled().unwrap_or_else(|e| {
            log::error!("Bundled seed rejected, starting empty: {}", e);
            InMemoryDataSource::empty()
        })
    } else {
        InMemoryDataSource::empty()
    };
    Arc::new(source.with_latency(config.data.simulated_latency_ms))
}

#[component]
pub fn WithRoot(children: Children) -> impl IntoView {
    let config = load_config();
    let source = build_data_source(&config);
    let store = RegistryStore::new(source.clone());

    provide_context(config);
    provide_context(source);
    provide_context(store);

    view! {
        <ConfigProvider>
            {children()}
        </ConfigProvider>
    }
}

/// Services provided by `WithRoot`.
pub fn use_root_services() -> Option<(Config, SharedDataSource, RegistryStore)> {
    Some((
        use_context::<Config>()?,
        use_context::<SharedDataSource>()?,
        use_context::<RegistryStore>()?,
    ))
}
