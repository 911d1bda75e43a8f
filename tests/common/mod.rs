#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use financewise_core::{
    config::ConfigManager,
    core::{store::FinanceStore, time::FixedClock},
    storage::JsonStorage,
};
use tempfile::TempDir;

/// Instant every store-level test is pinned to.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 9, 30, 0).unwrap()
}

/// Creates a store and config manager rooted in a fresh temp directory.
///
/// The returned `TempDir` must stay alive for as long as the store is used.
pub fn setup_test_env() -> (FinanceStore, ConfigManager, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let store = store_in(&temp);
    let config_manager =
        ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("create config manager");
    (store, config_manager, temp)
}

/// Opens another store over the same directory, as a fresh app launch would.
pub fn store_in(temp: &TempDir) -> FinanceStore {
    let storage =
        JsonStorage::new(Some(temp.path().to_path_buf())).expect("create json storage backend");
    FinanceStore::with_clock(Box::new(storage), Box::new(FixedClock(fixed_now())))
}
