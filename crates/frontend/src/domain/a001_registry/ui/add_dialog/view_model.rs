use super::model;
use crate::shared::store::RegistryStore;
use contracts::domain::a001_registry::aggregate::CreateRegistryRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// First problem with the form, if any.
pub fn validation_message(request: &CreateRegistryRequest) -> Option<String> {
    request.validate().err().map(|e| match e {
        contracts::shared::error::ContractError::EmptyRegistryKey => {
            "Name is required".to_string()
        }
        other => other.to_string(),
    })
}

/// ViewModel for the "Add Registry" form
#[derive(Clone, Copy)]
pub struct RegistryAddViewModel {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// Bumped on every reset; a save started in an older session is ignored.
    session: StoredValue<u64>,
}

impl RegistryAddViewModel {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            session: StoredValue::new(0),
        }
    }

    pub fn request(&self) -> CreateRegistryRequest {
        CreateRegistryRequest {
            name: self.name.get(),
            description: self.description.get(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.saving.get() && validation_message(&self.request()).is_none()
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.error.set(None);
        self.saving.set(false);
        self.session.update_value(|s| *s += 1);
    }

    /// Submit the form; `on_saved` runs after the registry was created.
    pub fn save_command(&self, store: RegistryStore, on_saved: Callback<()>) {
        if let Some(task) = self.begin_save(store, on_saved) {
            spawn_local(task);
        }
    }

    /// Validate and mark the form as saving. The returned future submits it
    /// and applies the outcome, unless the form was reset in the meantime.
    fn begin_save(
        &self,
        store: RegistryStore,
        on_saved: Callback<()>,
    ) -> Option<impl Future<Output = ()> + 'static> {
        let request = CreateRegistryRequest {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
        };
        if let Some(message) = validation_message(&request) {
            self.error.set(Some(message));
            return None;
        }

        let vm = *self;
        let session = vm.session.get_value();
        vm.saving.set(true);
        vm.error.set(None);
        Some(async move {
            let result = model::submit(store, request).await;
            if vm.session.try_get_value() != Some(session) {
                log::debug!("Dropping outcome of a save from a closed dialog");
                return;
            }
            vm.saving.set(false);
            match result {
                Ok(_) => {
                    vm.reset();
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e)),
            }
        })
    }
}

impl Default for RegistryAddViewModel {
    fn default() -> Self {
        Self::new()
    }
}
