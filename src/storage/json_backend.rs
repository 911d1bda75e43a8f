use std::{fs, path::PathBuf};

use crate::{
    core::{
        errors::FinanceError,
        utils::{ensure_dir, tmp_path, write_atomic, PathResolver},
    },
    domain::common::Principal,
};

use super::{Result, StorageBackend, UserSnapshot, SNAPSHOT_SCHEMA_VERSION};

/// Stores one pretty-printed JSON snapshot per user under `<root>/snapshots`.
#[derive(Clone)]
pub struct JsonStorage {
    snapshots_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let app_root = PathResolver::resolve_base(root);
        ensure_dir(&app_root)?;
        let snapshots_dir = PathResolver::snapshot_dir_in(&app_root);
        ensure_dir(&snapshots_dir)?;
        Ok(Self { snapshots_dir })
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self, user: &Principal) -> Result<UserSnapshot> {
        let path = self.snapshot_path(user);
        if !path.exists() {
            return Ok(UserSnapshot::empty(user.clone()));
        }
        let data = fs::read_to_string(&path)?;
        let snapshot: UserSnapshot = serde_json::from_str(&data)?;
        if snapshot.schema_version > SNAPSHOT_SCHEMA_VERSION {
            return Err(FinanceError::StorageError(format!(
                "snapshot schema {} is newer than supported {}",
                snapshot.schema_version, SNAPSHOT_SCHEMA_VERSION
            )));
        }
        if &snapshot.user != user {
            return Err(FinanceError::StorageError(format!(
                "snapshot at {} belongs to another user",
                path.display()
            )));
        }
        Ok(snapshot)
    }

    fn save(&self, snapshot: &UserSnapshot) -> Result<PathBuf> {
        let path = self.snapshot_path(&snapshot.user);
        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(path)
    }

    fn snapshot_path(&self, user: &Principal) -> PathBuf {
        self.snapshots_dir
            .join(format!("{}.json", canonical_name(user.as_str())))
    }
}

/// Maps a principal to a file stem, one-to-one.
///
/// `[a-z0-9-]` pass through and every other byte becomes `_xx` (lowercase hex),
/// so distinct principals never share a snapshot file.
fn canonical_name(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'-' => stem.push(char::from(byte)),
            _ => stem.push_str(&format!("_{byte:02x}")),
        }
    }
    stem
}
