use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct RegistryListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for RegistryListState {
    fn default() -> Self {
        Self {
            sort_field: "name".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<RegistryListState> {
    RwSignal::new(RegistryListState::default())
}
