//! Shared contracts between the registry browser and its data layer.

pub mod domain;
pub mod shared;
