pub mod add_dialog;
pub mod list;
