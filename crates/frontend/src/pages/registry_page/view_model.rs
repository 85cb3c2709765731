use super::state::{ActiveView, FetchKind, FetchRequest, RegistryEvent, RegistryPageState};
use crate::shared::data::{Loadable, SharedDataSource};
use contracts::domain::a002_curator::aggregate::Curator;
use contracts::domain::a003_claim::aggregate::ClaimList;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// ViewModel for the registry page
#[derive(Clone, Copy)]
pub struct RegistryPageViewModel {
    state: RwSignal<RegistryPageState>,
    source: StoredValue<SharedDataSource>,
}

impl RegistryPageViewModel {
    pub fn new(source: SharedDataSource) -> Self {
        Self {
            state: RwSignal::new(RegistryPageState::new()),
            source: StoredValue::new(source),
        }
    }

    /// Apply `event` and start the fetch it calls for, if any.
    pub fn handle_event(&self, event: RegistryEvent) {
        if let Some(request) = self.apply_event(event) {
            spawn_local(self.fetch(request));
        }
    }

    fn apply_event(&self, event: RegistryEvent) -> Option<FetchRequest> {
        let mut request = None;
        self.state.update(|s| request = s.handle_event(event));
        request
    }

    /// Load the data for `request` and hand it to the page state, which
    /// drops it if the view moved on in the meantime.
    fn fetch(&self, request: FetchRequest) -> impl Future<Output = ()> + 'static {
        let state = self.state;
        let source = self.source.get_value();
        let FetchRequest { kind, tag } = request;
        async move {
            match kind {
                FetchKind::Curators => {
                    let result = source.list_curators_for(&tag.key).await;
                    state.try_update(|s| s.apply_curators(&tag, result));
                }
                FetchKind::Claims => {
                    let result = source.list_claims_for(&tag.key).await;
                    state.try_update(|s| s.apply_claims(&tag, result));
                }
            }
        }
    }

    pub fn active_view(&self) -> Memo<ActiveView> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| ActiveView::of(s.view())))
    }

    pub fn curators(&self) -> Signal<Loadable<Vec<Curator>>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.curators().clone()))
    }

    pub fn claims(&self) -> Signal<Loadable<ClaimList>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.claims().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::InMemoryDataSource;
    use futures::executor::block_on;
    use std::sync::Arc;

    fn view_model() -> RegistryPageViewModel {
        RegistryPageViewModel::new(Arc::new(InMemoryDataSource::bundled().unwrap()))
    }

    fn show_curators(name: &str) -> RegistryEvent {
        RegistryEvent::show_curators(name).unwrap()
    }

    #[test]
    fn test_curators_load_after_show_curators() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = view_model();
            let request = vm.apply_event(show_curators("Art Provenance")).unwrap();
            assert!(vm.curators().get_untracked().is_loading());

            block_on(vm.fetch(request));
            let curators = vm.curators().get_untracked();
            assert_eq!(curators.loaded().map(Vec::len), Some(2));
        });
    }

    #[test]
    fn test_claims_load_after_show_claims() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = view_model();
            let event = RegistryEvent::show_claims("Open Datasets").unwrap();
            let request = vm.apply_event(event).unwrap();

            block_on(vm.fetch(request));
            let claims = vm.claims().get_untracked();
            let list = claims.loaded().unwrap();
            assert!(list.claim_races.is_empty());
            assert_eq!(list.claim_sets.len(), 1);
        });
    }

    #[test]
    fn test_older_fetch_finishing_last_is_dropped() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = view_model();
            let first = vm.apply_event(show_curators("Art Provenance")).unwrap();
            let second = vm.apply_event(show_curators("Open Datasets")).unwrap();

            block_on(vm.fetch(second));
            block_on(vm.fetch(first));

            let curators = vm.curators().get_untracked();
            let names: Vec<String> = curators
                .loaded()
                .unwrap()
                .iter()
                .map(|c| c.registry.to_string())
                .collect();
            assert_eq!(names, vec!["Open Datasets".to_string()]);
        });
    }

    #[test]
    fn test_fetch_after_back_leaves_list_idle() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = view_model();
            let request = vm.apply_event(show_curators("Art Provenance")).unwrap();
            assert_eq!(vm.apply_event(RegistryEvent::Back), None);

            block_on(vm.fetch(request));
            assert_eq!(vm.curators().get_untracked(), Loadable::Idle);
        });
    }

    #[test]
    fn test_unknown_registry_shows_error() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = view_model();
            let request = vm.apply_event(show_curators("Nope")).unwrap();

            block_on(vm.fetch(request));
            assert_eq!(
                vm.curators().get_untracked().error(),
                Some("registry 'Nope' not found")
            );
        });
    }
}
