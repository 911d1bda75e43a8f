pub mod json_backend;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::FinanceError;
use crate::domain::{common::Principal, goal::SavingsGoal, transaction::TransactionData};

pub type Result<T> = std::result::Result<T, FinanceError>;

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Everything persisted for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    pub schema_version: u32,
    pub user: Principal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub transactions: Vec<TransactionData>,
}

impl UserSnapshot {
    pub fn empty(user: Principal) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            user,
            saved_at: None,
            goals: Vec::new(),
            transactions: Vec::new(),
        }
    }
}

/// Abstraction over persistence backends capable of storing per-user snapshots.
pub trait StorageBackend: Send + Sync {
    /// Loads the user's snapshot, returning an empty one when nothing was saved yet.
    fn load(&self, user: &Principal) -> Result<UserSnapshot>;
    fn save(&self, snapshot: &UserSnapshot) -> Result<PathBuf>;
    fn snapshot_path(&self, user: &Principal) -> PathBuf;
}

pub use json_backend::JsonStorage;
