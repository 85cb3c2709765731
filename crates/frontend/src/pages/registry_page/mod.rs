//! Registry page: registry list with drill-down into curators and claims.
//!
//! - state.rs: view-state machine and request bookkeeping (no Leptos)
//! - view_model.rs: reactive wrapper that runs the fetches
//! - view.rs: Leptos component

pub mod state;
mod view;
mod view_model;

pub use view::RegistryPage;
pub use view_model::RegistryPageViewModel;
