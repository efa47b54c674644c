use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::debug;

/// The one store of this process, created on first use
static STORE: Lazy<Arc<Store>> = Lazy::new(|| Arc::new(Store::new()));

/// In-memory key-value store
///
/// Every operation holds the single lock for its whole map access, so all
/// reads and writes are serialized. The guard is dropped on every exit path.
pub struct Store {
  data: Mutex<HashMap<String, String>>,
}

impl Store {
  /// Create a new empty store
  pub(crate) fn new() -> Self {
    Self {
      data: Mutex::new(HashMap::new()),
    }
  }

  /// Get the process-wide store
  pub fn shared() -> Arc<Store> {
    Arc::clone(&*STORE)
  }

  /// Insert the key, or overwrite its current value
  pub fn put(&self, key: String, value: String) {
    let mut data = self.data.lock();
    debug!("Added/Updated pair <key={}, value={}>", key, value);
    data.insert(key, value);
  }

  /// Remove the key, returning whether an entry was there
  pub fn delete(&self, key: &str) -> bool {
    let mut data = self.data.lock();
    match data.remove(key) {
      Some(_) => {
        debug!("Deleted key={}", key);
        true
      }
      None => {
        debug!("Key={} is not found", key);
        false
      }
    }
  }

  /// Get the value for a key
  pub fn get(&self, key: &str) -> Option<String> {
    let data = self.data.lock();
    let value = data.get(key).cloned();
    match &value {
      Some(v) => debug!("Retrieved value={} for key={}", v, key),
      None => debug!("Key={} is not found", key),
    }
    value
  }

  /// Number of stored keys
  pub fn len(&self) -> usize {
    self.data.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
