use contracts::shared::error::ContractError;
use thiserror::Error;

/// Failure reported by a `RegistryDataSource`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("registry '{0}' not found")]
    NotFound(String),

    #[error("registry '{0}' already exists")]
    Conflict(String),

    #[error(transparent)]
    Invalid(#[from] ContractError),

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}
