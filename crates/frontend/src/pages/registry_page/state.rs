//! View-state machine of the registry page.
//!
//! Exactly one table is shown at a time: the registry list, or the curators
//! or claims of one selected registry. The "Add Registry" dialog is an
//! orthogonal flag that can only be open over the registry list.

use crate::shared::data::{DataError, Loadable};
use contracts::domain::a001_registry::aggregate::RegistryKey;
use contracts::domain::a002_curator::aggregate::Curator;
use contracts::domain::a003_claim::aggregate::ClaimList;
use contracts::shared::error::ContractError;

/// Which table is on screen. Scoped views carry their registry key, so a
/// scoped view without a selection cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Registries,
    Curators(RegistryKey),
    Claims(RegistryKey),
}

impl ViewMode {
    pub fn key(&self) -> Option<&RegistryKey> {
        match self {
            ViewMode::Registries => None,
            ViewMode::Curators(key) | ViewMode::Claims(key) => Some(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub mode: ViewMode,
    pub creating_new: bool,
}

impl ViewState {
    pub fn selected_key(&self) -> Option<&RegistryKey> {
        self.mode.key()
    }

    /// Whether `event` may be applied in this state.
    pub fn accepts(&self, event: &RegistryEvent) -> bool {
        match event {
            RegistryEvent::CloseCreate => self.creating_new,
            _ => true,
        }
    }
}

/// User intents fed back from the tables and the create dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    Back,
    ShowCurators(RegistryKey),
    ShowClaims(RegistryKey),
    OpenCreate,
    CloseCreate,
}

impl RegistryEvent {
    pub fn show_curators(name: &str) -> Result<Self, ContractError> {
        RegistryKey::new(name).map(RegistryEvent::ShowCurators)
    }

    pub fn show_claims(name: &str) -> Result<Self, ContractError> {
        RegistryKey::new(name).map(RegistryEvent::ShowClaims)
    }
}

/// Next state for `event`. Events `state` does not accept leave it unchanged.
pub fn transition(state: &ViewState, event: &RegistryEvent) -> ViewState {
    if !state.accepts(event) {
        return state.clone();
    }

    match event {
        RegistryEvent::Back => ViewState::default(),
        RegistryEvent::ShowCurators(key) => ViewState {
            mode: ViewMode::Curators(key.clone()),
            creating_new: false,
        },
        RegistryEvent::ShowClaims(key) => ViewState {
            mode: ViewMode::Claims(key.clone()),
            creating_new: false,
        },
        RegistryEvent::OpenCreate => ViewState {
            mode: ViewMode::Registries,
            creating_new: true,
        },
        RegistryEvent::CloseCreate => ViewState {
            mode: state.mode.clone(),
            creating_new: false,
        },
    }
}

/// Identifies one outstanding fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    pub key: RegistryKey,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Curators,
    Claims,
}

/// Data the caller must request after a transition into a scoped view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: FetchKind,
    pub tag: RequestTag,
}

/// The page controller: view state plus the data of the scoped views.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistryPageState {
    view: ViewState,
    curators: Loadable<Vec<Curator>>,
    claims: Loadable<ClaimList>,
    generation: u64,
}

impl RegistryPageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn curators(&self) -> &Loadable<Vec<Curator>> {
        &self.curators
    }

    pub fn claims(&self) -> &Loadable<ClaimList> {
        &self.claims
    }

    /// Apply `event`. Returns the fetch to start when a scoped view is entered.
    ///
    /// Every applied event starts a new generation, so results of requests
    /// issued before it are dropped by `apply_curators` / `apply_claims`.
    pub fn handle_event(&mut self, event: RegistryEvent) -> Option<FetchRequest> {
        if !self.view.accepts(&event) {
            log::debug!("registry page: ignoring {:?} in {:?}", event, self.view);
            return None;
        }

        let next = transition(&self.view, &event);
        log::debug!("registry page: {:?} -> {:?}", event, next.mode);
        self.generation += 1;

        let request = match &next.mode {
            ViewMode::Registries => {
                self.curators = Loadable::Idle;
                self.claims = Loadable::Idle;
                None
            }
            ViewMode::Curators(key) => {
                self.curators = Loadable::Loading;
                self.claims = Loadable::Idle;
                Some(self.request(FetchKind::Curators, key))
            }
            ViewMode::Claims(key) => {
                self.curators = Loadable::Idle;
                self.claims = Loadable::Loading;
                Some(self.request(FetchKind::Claims, key))
            }
        };
        self.view = next;
        request
    }

    fn request(&self, kind: FetchKind, key: &RegistryKey) -> FetchRequest {
        FetchRequest {
            kind,
            tag: RequestTag {
                key: key.clone(),
                generation: self.generation,
            },
        }
    }

    fn is_current(&self, kind: FetchKind, tag: &RequestTag) -> bool {
        if tag.generation != self.generation {
            return false;
        }
        match (&self.view.mode, kind) {
            (ViewMode::Curators(key), FetchKind::Curators) => key == &tag.key,
            (ViewMode::Claims(key), FetchKind::Claims) => key == &tag.key,
            _ => false,
        }
    }

    /// Store fetched curators. Returns `false` if the result is stale.
    pub fn apply_curators(
        &mut self,
        tag: &RequestTag,
        result: Result<Vec<Curator>, DataError>,
    ) -> bool {
        if !self.is_current(FetchKind::Curators, tag) {
            log::warn!(
                "registry page: dropping curators for '{}' (generation {}, current {})",
                tag.key,
                tag.generation,
                self.generation
            );
            return false;
        }
        if let Err(e) = &result {
            log::error!("Failed to load curators for '{}': {}", tag.key, e);
        }
        self.curators = Loadable::from_result(result);
        true
    }

    /// Store fetched claims. Returns `false` if the result is stale.
    pub fn apply_claims(&mut self, tag: &RequestTag, result: Result<ClaimList, DataError>) -> bool {
        if !self.is_current(FetchKind::Claims, tag) {
            log::warn!(
                "registry page: dropping claims for '{}' (generation {}, current {})",
                tag.key,
                tag.generation,
                self.generation
            );
            return false;
        }
        if let Err(e) = &result {
            log::error!("Failed to load claims for '{}': {}", tag.key, e);
        }
        self.claims = Loadable::from_result(result);
        true
    }
}

/// What the page draws for a given view state: exactly one table, and on
/// the registry list possibly the create dialog over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    Registries { create_dialog_open: bool },
    Curators(RegistryKey),
    Claims(RegistryKey),
}

impl ActiveView {
    pub fn of(state: &ViewState) -> Self {
        match &state.mode {
            ViewMode::Registries => ActiveView::Registries {
                create_dialog_open: state.creating_new,
            },
            ViewMode::Curators(key) => ActiveView::Curators(key.clone()),
            ViewMode::Claims(key) => ActiveView::Claims(key.clone()),
        }
    }

    pub fn create_dialog_open(&self) -> bool {
        matches!(self, ActiveView::Registries { create_dialog_open: true })
    }

    /// The same table with the overlay dropped.
    pub fn table(&self) -> Self {
        match self {
            ActiveView::Registries { .. } => ActiveView::Registries {
                create_dialog_open: false,
            },
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_curator::aggregate::CuratorId;

    fn key(name: &str) -> RegistryKey {
        RegistryKey::new(name).unwrap()
    }

    fn curator(registry: &str) -> Curator {
        Curator {
            id: CuratorId::new_v4(),
            registry: key(registry),
            name: "Maren Holt".to_string(),
            address: "0x3f5c".to_string(),
        }
    }

    fn one_hot(state: &ViewState) -> usize {
        [
            matches!(state.mode, ViewMode::Registries),
            matches!(state.mode, ViewMode::Curators(_)),
            matches!(state.mode, ViewMode::Claims(_)),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    #[test]
    fn test_initial_state() {
        let page = RegistryPageState::new();
        assert_eq!(page.view().mode, ViewMode::Registries);
        assert!(!page.view().creating_new);
        assert!(page.view().selected_key().is_none());
        assert_eq!(page.curators(), &Loadable::Idle);
        assert_eq!(page.claims(), &Loadable::Idle);
    }

    #[test]
    fn test_back_resets_from_every_state() {
        let starts = [
            ViewState::default(),
            ViewState {
                mode: ViewMode::Curators(key("R1")),
                creating_new: false,
            },
            ViewState {
                mode: ViewMode::Claims(key("R2")),
                creating_new: false,
            },
            ViewState {
                mode: ViewMode::Registries,
                creating_new: true,
            },
        ];
        for start in starts {
            let next = transition(&start, &RegistryEvent::Back);
            assert_eq!(next, ViewState::default());
        }
    }

    #[test]
    fn test_show_curators_then_claims_keeps_key() {
        let mut page = RegistryPageState::new();
        page.handle_event(RegistryEvent::show_curators("R1").unwrap());
        assert_eq!(page.view().mode, ViewMode::Curators(key("R1")));
        assert_eq!(page.view().selected_key(), Some(&key("R1")));

        page.handle_event(RegistryEvent::show_claims("R1").unwrap());
        assert_eq!(page.view().mode, ViewMode::Claims(key("R1")));
        assert_eq!(page.view().selected_key(), Some(&key("R1")));
    }

    #[test]
    fn test_prior_key_does_not_leak() {
        let mut page = RegistryPageState::new();
        page.handle_event(RegistryEvent::ShowCurators(key("A")));
        page.handle_event(RegistryEvent::Back);
        assert!(page.view().selected_key().is_none());

        page.handle_event(RegistryEvent::ShowClaims(key("B")));
        assert_eq!(page.view().mode, ViewMode::Claims(key("B")));
    }

    #[test]
    fn test_open_create_forces_registries() {
        let mut page = RegistryPageState::new();
        page.handle_event(RegistryEvent::ShowCurators(key("R1")));

        assert_eq!(page.handle_event(RegistryEvent::OpenCreate), None);
        assert!(page.view().creating_new);
        assert_eq!(page.view().mode, ViewMode::Registries);
        assert_eq!(
            ActiveView::of(page.view()),
            ActiveView::Registries {
                create_dialog_open: true
            }
        );

        page.handle_event(RegistryEvent::CloseCreate);
        assert_eq!(page.view(), &ViewState::default());
        assert_eq!(page.curators(), &Loadable::Idle);
    }

    #[test]
    fn test_close_create_when_closed_is_ignored() {
        let mut page = RegistryPageState::new();
        page.handle_event(RegistryEvent::ShowClaims(key("R1")));
        let before = page.clone();

        assert_eq!(page.handle_event(RegistryEvent::CloseCreate), None);
        assert_eq!(page, before);
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert_eq!(
            RegistryEvent::show_curators(""),
            Err(ContractError::EmptyRegistryKey)
        );
        assert_eq!(
            RegistryEvent::show_claims("  "),
            Err(ContractError::EmptyRegistryKey)
        );
    }

    #[test]
    fn test_exactly_one_view_for_any_sequence() {
        let events = [
            RegistryEvent::OpenCreate,
            RegistryEvent::ShowCurators(key("R1")),
            RegistryEvent::CloseCreate,
            RegistryEvent::ShowClaims(key("R2")),
            RegistryEvent::OpenCreate,
            RegistryEvent::CloseCreate,
            RegistryEvent::Back,
            RegistryEvent::ShowClaims(key("R3")),
            RegistryEvent::ShowCurators(key("R3")),
        ];
        // Walk every prefix of every rotation of the event list.
        for start in 0..events.len() {
            let mut page = RegistryPageState::new();
            for offset in 0..events.len() {
                let event = events[(start + offset) % events.len()].clone();
                page.handle_event(event);
                let view = page.view();
                assert_eq!(one_hot(view), 1);
                assert_eq!(
                    view.selected_key().is_some(),
                    !matches!(view.mode, ViewMode::Registries)
                );
                if view.creating_new {
                    assert_eq!(view.mode, ViewMode::Registries);
                }
            }
        }
    }

    #[test]
    fn test_scoped_transition_requests_data() {
        let mut page = RegistryPageState::new();
        let request = page
            .handle_event(RegistryEvent::ShowCurators(key("R1")))
            .unwrap();
        assert_eq!(request.kind, FetchKind::Curators);
        assert_eq!(request.tag.key, key("R1"));
        assert!(page.curators().is_loading());

        let request = page
            .handle_event(RegistryEvent::ShowClaims(key("R1")))
            .unwrap();
        assert_eq!(request.kind, FetchKind::Claims);
        assert!(page.claims().is_loading());
        assert_eq!(page.curators(), &Loadable::Idle);

        assert_eq!(page.handle_event(RegistryEvent::Back), None);
        assert_eq!(page.claims(), &Loadable::Idle);
    }

    #[test]
    fn test_result_is_applied_for_current_request() {
        let mut page = RegistryPageState::new();
        let request = page
            .handle_event(RegistryEvent::ShowCurators(key("R1")))
            .unwrap();

        assert!(page.apply_curators(&request.tag, Ok(vec![curator("R1")])));
        assert_eq!(page.curators().loaded().map(Vec::len), Some(1));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut page = RegistryPageState::new();
        let for_a = page
            .handle_event(RegistryEvent::ShowCurators(key("A")))
            .unwrap();
        let for_b = page
            .handle_event(RegistryEvent::ShowCurators(key("B")))
            .unwrap();

        assert!(!page.apply_curators(&for_a.tag, Ok(vec![curator("A")])));
        assert!(page.curators().is_loading());

        assert!(page.apply_curators(&for_b.tag, Ok(vec![curator("B")])));
        let loaded = page.curators().loaded().unwrap();
        assert_eq!(loaded[0].registry, key("B"));
    }

    #[test]
    fn test_same_key_refetch_drops_older_result() {
        let mut page = RegistryPageState::new();
        let first = page
            .handle_event(RegistryEvent::ShowClaims(key("R1")))
            .unwrap();
        let second = page
            .handle_event(RegistryEvent::ShowClaims(key("R1")))
            .unwrap();
        assert_ne!(first.tag.generation, second.tag.generation);

        assert!(!page.apply_claims(&first.tag, Ok(ClaimList::default())));
        assert!(page.apply_claims(&second.tag, Ok(ClaimList::default())));
    }

    #[test]
    fn test_result_after_leaving_view_is_discarded() {
        let mut page = RegistryPageState::new();
        let request = page
            .handle_event(RegistryEvent::ShowClaims(key("R1")))
            .unwrap();
        page.handle_event(RegistryEvent::Back);

        assert!(!page.apply_claims(&request.tag, Ok(ClaimList::default())));
        assert_eq!(page.claims(), &Loadable::Idle);
    }

    #[test]
    fn test_failed_fetch_is_visible() {
        let mut page = RegistryPageState::new();
        let request = page
            .handle_event(RegistryEvent::ShowClaims(key("R1")))
            .unwrap();

        assert!(page.apply_claims(
            &request.tag,
            Err(DataError::NotFound("R1".to_string()))
        ));
        assert_eq!(page.claims().error(), Some("registry 'R1' not found"));
    }

    #[test]
    fn test_wrong_kind_result_is_discarded() {
        let mut page = RegistryPageState::new();
        let request = page
            .handle_event(RegistryEvent::ShowClaims(key("R1")))
            .unwrap();
        assert!(!page.apply_curators(&request.tag, Ok(vec![])));
    }

    #[test]
    fn test_active_view_matches_mode() {
        let mut page = RegistryPageState::new();
        let registries = ActiveView::of(page.view());
        assert_eq!(
            registries,
            ActiveView::Registries {
                create_dialog_open: false
            }
        );
        assert!(!registries.create_dialog_open());

        page.handle_event(RegistryEvent::OpenCreate);
        let overlaid = ActiveView::of(page.view());
        assert!(overlaid.create_dialog_open());
        assert_eq!(overlaid.table(), registries);

        page.handle_event(RegistryEvent::CloseCreate);
        page.handle_event(RegistryEvent::ShowCurators(key("R1")));
        assert_eq!(ActiveView::of(page.view()), ActiveView::Curators(key("R1")));
        assert!(!ActiveView::of(page.view()).create_dialog_open());

        page.handle_event(RegistryEvent::ShowClaims(key("R2")));
        assert_eq!(ActiveView::of(page.view()), ActiveView::Claims(key("R2")));
    }
}
