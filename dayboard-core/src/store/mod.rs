//! Durable key-value persistence for the board's collections.
//!
//! Four independent keys, each holding one serialized JSON array. The
//! [`Store`] trait abstracts the backing medium so tests can substitute
//! an in-memory fake; [`load_collection`] and [`save_collection`] add the
//! typed layer with the recovery policy: read failures degrade to the
//! empty default, write failures leave the previous durable value in
//! place. Both are logged, neither is surfaced to the caller.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DayboardResult;

/// The four durable collection keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Events,
    Notes,
    LifeEvents,
    Goals,
}

impl StoreKey {
    pub const ALL: [StoreKey; 4] = [
        StoreKey::Events,
        StoreKey::Notes,
        StoreKey::LifeEvents,
        StoreKey::Goals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Events => "events",
            StoreKey::Notes => "notes",
            StoreKey::LifeEvents => "life-events",
            StoreKey::Goals => "goals",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Backing medium for serialized collections.
pub trait Store {
    /// The serialized payload under `key`, or `None` if never written.
    fn read(&self, key: StoreKey) -> DayboardResult<Option<String>>;

    /// Overwrite the payload under `key`.
    fn write(&self, key: StoreKey, payload: &str) -> DayboardResult<()>;
}

/// Load the collection stored under `key`.
///
/// A missing key, an unreadable store, or a malformed payload all yield
/// the empty default; the failure is logged, never returned. Date fields
/// inside individual records degrade leniently on their own (see
/// [`crate::model::timestamp`]).
pub fn load_collection<T: DeserializeOwned>(store: &dyn Store, key: StoreKey) -> Vec<T> {
    let payload = match store.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::error!("failed to read \"{key}\": {err}; starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&payload) {
        Ok(items) => items,
        Err(err) => {
            tracing::error!("malformed payload under \"{key}\": {err}; starting empty");
            Vec::new()
        }
    }
}

/// Mirror `items` to the store under `key`.
///
/// On serialization or write failure the previous durable value is left
/// in place and the in-memory collection stays authoritative for the
/// session. The failure is logged, not retried.
pub fn save_collection<T: Serialize>(store: &dyn Store, key: StoreKey, items: &[T]) {
    let payload = match serde_json::to_string_pretty(items) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!("could not serialize \"{key}\": {err}; keeping previous value");
            return;
        }
    };

    if let Err(err) = store.write(key, &payload) {
        tracing::error!("could not persist \"{key}\": {err}; in-memory state remains authoritative");
    }
}
