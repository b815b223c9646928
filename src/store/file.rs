use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::error::{AppError, AppResult};

use super::StateStore;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// One JSON object file per workspace. Changes stay in memory until
/// `commit` rewrites the whole file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
    dirty: bool,
}

impl JsonFileStore {
    /// Opens the store for `workspace` inside `dir`. An unreadable or corrupt
    /// file starts out empty.
    pub fn open(dir: impl AsRef<Path>, workspace: &str) -> Self {
        let path = dir
            .as_ref()
            .join(format!("workspace-{:016x}.json", workspace_hash(workspace)));
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "starting with empty history store");
                BTreeMap::new()
            }
        };
        Self {
            path,
            entries,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| {
                AppError::io_with_context(
                    source,
                    format!("failed to create store dir: {}", parent.display()),
                )
            })?;
        }
        let raw = serde_json::to_vec_pretty(&self.entries)
            .map_err(|source| AppError::serialization(source, "failed to encode history store"))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|source| {
            AppError::io_with_context(source, format!("failed to write {}", tmp.display()))
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to replace {}", self.path.display()))
        })
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> AppResult<()> {
        self.entries.insert(key.to_string(), value);
        self.dirty = true;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.entries.remove(key).is_some() {
            self.dirty = true;
        }
        Ok(())
    }

    fn commit(&mut self) -> AppResult<()> {
        if !self.dirty {
            return Ok(());
        }
        self.flush()?;
        self.dirty = false;
        Ok(())
    }
}

fn read_entries(path: &Path) -> AppResult<BTreeMap<String, Value>> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(err) => {
            return Err(AppError::io_with_context(
                err,
                format!("failed to read {}", path.display()),
            ));
        }
    };
    serde_json::from_slice(&raw).map_err(|source| {
        AppError::serialization(source, format!("failed to parse {}", path.display()))
    })
}

// FNV-1a, stable across runs and toolchains.
fn workspace_hash(workspace: &str) -> u64 {
    workspace.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}
