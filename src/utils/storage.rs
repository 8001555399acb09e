use std::cell::RefCell;
use std::collections::HashMap;

/// String key/value persistence for session, locale and challenge records.
/// The browser implementation maps onto `window.localStorage`; the in-memory
/// one backs tests and non-web targets.
pub trait StorageBackend {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&self, key: &str, value: &str);
  fn remove(&self, key: &str);
}

/// `localStorage`-backed store. All operations degrade to no-ops when the
/// window or its storage is unavailable (privacy mode, detached contexts).
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
  web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

impl StorageBackend for BrowserStorage {
  #[cfg(target_arch = "wasm32")]
  fn get(&self, key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok()).flatten()
  }

  #[cfg(target_arch = "wasm32")]
  fn set(&self, key: &str, value: &str) {
    if let Some(s) = local_storage() {
      let _ = s.set_item(key, value);
    }
  }

  #[cfg(target_arch = "wasm32")]
  fn remove(&self, key: &str) {
    if let Some(s) = local_storage() {
      let _ = s.remove_item(key);
    }
  }

  #[cfg(not(target_arch = "wasm32"))]
  fn get(&self, _key: &str) -> Option<String> {
    None
  }

  #[cfg(not(target_arch = "wasm32"))]
  fn set(&self, _key: &str, _value: &str) {}

  #[cfg(not(target_arch = "wasm32"))]
  fn remove(&self, _key: &str) {}
}

/// In-memory store used by tests.
#[derive(Default)]
pub struct MemoryStorage {
  entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl StorageBackend for MemoryStorage {
  fn get(&self, key: &str) -> Option<String> {
    self.entries.borrow().get(key).cloned()
  }

  fn set(&self, key: &str, value: &str) {
    self.entries.borrow_mut().insert(key.to_string(), value.to_string());
  }

  fn remove(&self, key: &str) {
    self.entries.borrow_mut().remove(key);
  }
}
