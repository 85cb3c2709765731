//! "Add Registry" dialog
//!
//! MVVM split:
//! - model.rs: submission through the registry store
//! - view_model.rs: form state, validation, save command
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::RegistryAddDialog;
pub use view_model::RegistryAddViewModel;
