use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::input::InputError;

/// Unified error type for the store, storage and configuration layers.
///
/// The calculation services are total functions and never return it.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("No user is signed in")]
    NotAuthenticated,
    #[error("Savings goal not found: {0}")]
    GoalNotFound(Uuid),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, FinanceError>;

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}

impl From<InputError> for FinanceError {
    fn from(err: InputError) -> Self {
        FinanceError::InvalidInput(err.to_string())
    }
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Usage: {0}")]
    Usage(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Core(FinanceError::from(err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Input(err.to_string())
    }
}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        CliError::Input(err.to_string())
    }
}
