pub mod a001_registry;
pub mod a002_curator;
pub mod a003_claim;
pub mod common;
