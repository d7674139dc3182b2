//! In-memory store for tests and ephemeral sessions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Store, StoreKey};
use crate::error::{DayboardError, DayboardResult};

/// A `Store` backed by a plain map. Clones created with
/// [`with_failing_writes`](MemoryStore::with_failing_writes) share the
/// same underlying entries.
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<StoreKey, String>>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            entries: Rc::new(RefCell::new(HashMap::new())),
            fail_writes: false,
        }
    }

    /// A view of the same entries whose writes always fail, for
    /// exercising the degraded-persistence path.
    pub fn with_failing_writes(&self) -> Self {
        MemoryStore {
            entries: Rc::clone(&self.entries),
            fail_writes: true,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn read(&self, key: StoreKey) -> DayboardResult<Option<String>> {
        Ok(self.entries.borrow().get(&key).cloned())
    }

    fn write(&self, key: StoreKey, payload: &str) -> DayboardResult<()> {
        if self.fail_writes {
            return Err(DayboardError::Storage(format!("writes disabled for \"{key}\"")));
        }
        self.entries.borrow_mut().insert(key, payload.to_string());
        Ok(())
    }
}
