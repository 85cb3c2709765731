pub mod components;
pub mod config;
pub mod data;
pub mod list_utils;
pub mod responsive;
pub mod root;
pub mod store;
