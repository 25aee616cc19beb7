//! Shared store of last-fetched variable values.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Last-fetched variable values, keyed by variable name.
///
/// Handles are cheap to clone and all share one underlying map, so a
/// consumer can keep a handle and read current values at any time between
/// refreshes. A list pass writes entries one at a time; a reader may
/// therefore observe a map mixing values from the previous and the current
/// pass mid-refresh. That narrowing assumption is acceptable for the
/// intended single periodic poller and is preserved here rather than fixed.
///
/// The store is keyed by variable name only. Switching UPS identifiers
/// without calling [`VariableStore::clear`] leaves the previous unit's
/// entries in place under the same names.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl VariableStore {
    /// Create an empty store.
    pub fn new() -> VariableStore {
        VariableStore::default()
    }

    /// Look up the last-fetched value of one variable.
    pub fn get(&self, name: &str) -> Option<String> {
        self.read().get(name).cloned()
    }

    /// Copy the current contents of the store.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.read().clone()
    }

    /// Number of variables currently held.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no variables.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Remove every entry, e.g. before switching to another UPS.
    pub fn clear(&self) {
        self.write().clear();
    }

    pub(crate) fn insert(&self, name: &str, value: &str) {
        self.write().insert(name.to_string(), value.to_string());
    }

    // A poisoned lock only means a writer panicked between two inserts; the
    // map itself is still a valid (partial) snapshot, so recover it.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
