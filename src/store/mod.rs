mod file;
mod memory;

use serde_json::Value;
use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::history::HistorySnapshot;
use crate::position::Position;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

pub const BACK_STACK_KEY: &str = "navtrail.backStack";
pub const FORWARD_STACK_KEY: &str = "navtrail.forwardStack";
pub const LAST_POSITION_KEY: &str = "navtrail.lastPosition";

/// Per-workspace key/value store holding JSON values. `set` and `remove`
/// may be buffered until `commit`.
pub trait StateStore: Send {
    fn get(&self, key: &str) -> AppResult<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;

    fn commit(&mut self) -> AppResult<()> {
        Ok(())
    }
}

pub fn save_snapshot(store: &mut dyn StateStore, snapshot: &HistorySnapshot) -> AppResult<()> {
    store.set(BACK_STACK_KEY, encode(&snapshot.back_stack, BACK_STACK_KEY)?)?;
    store.set(
        FORWARD_STACK_KEY,
        encode(&snapshot.forward_stack, FORWARD_STACK_KEY)?,
    )?;
    match &snapshot.last_position {
        Some(position) => store.set(LAST_POSITION_KEY, encode(position, LAST_POSITION_KEY)?)?,
        None => store.remove(LAST_POSITION_KEY)?,
    }
    store.commit()
}

/// Reads each key independently; anything missing, unreadable or malformed
/// comes back empty.
pub fn load_snapshot(store: &dyn StateStore) -> HistorySnapshot {
    HistorySnapshot {
        back_stack: read_key::<Vec<Position>>(store, BACK_STACK_KEY).unwrap_or_default(),
        forward_stack: read_key::<Vec<Position>>(store, FORWARD_STACK_KEY).unwrap_or_default(),
        last_position: read_key::<Position>(store, LAST_POSITION_KEY),
    }
}

fn encode<T: serde::Serialize>(value: &T, key: &str) -> AppResult<Value> {
    serde_json::to_value(value)
        .map_err(|source| AppError::serialization(source, format!("failed to encode {key}")))
}

fn read_key<T: serde::de::DeserializeOwned>(store: &dyn StateStore, key: &str) -> Option<T> {
    let value = match store.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, error = %err, "failed to read persisted history");
            return None;
        }
    };
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(key, error = %err, "discarding malformed persisted history");
            None
        }
    }
}
