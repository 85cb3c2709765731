//! Data layer of the registry browser.
//!
//! - `source.rs`: the `RegistryDataSource` trait every backend implements
//! - `memory.rs`: in-memory source seeded from the bundled fixture
//! - `loadable.rs`: per-request state (`Idle | Loading | Loaded | Failed`)
//! - `error.rs`: `DataError`

pub mod error;
pub mod loadable;
pub mod memory;
pub mod source;

pub use error::DataError;
pub use loadable::{Loadable, TrackedLoad};
pub use memory::InMemoryDataSource;
pub use source::{DataFuture, RegistryDataSource, SharedDataSource};
