use dioxus::prelude::*;

use super::storage::{BrowserStorage, StorageBackend};

const LANG_KEY: &str = "lang";

/// Display languages supported by the UI. Parsing is total: anything
/// unrecognized falls back to French.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
  #[default]
  Fr,
  En,
  Ar,
}

impl Lang {
  pub fn parse(value: &str) -> Lang {
    match value.to_lowercase().as_str() {
      "en" => Lang::En,
      "ar" => Lang::Ar,
      "fr" => Lang::Fr,
      _ => Lang::Fr,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Lang::Fr => "fr",
      Lang::En => "en",
      Lang::Ar => "ar",
    }
  }

  /// Text direction is derived, never stored.
  pub fn direction(&self) -> &'static str {
    match self {
      Lang::Ar => "rtl",
      _ => "ltr",
    }
  }
}

/// Holds the active display language. Every mutation persists the normalized
/// code and reapplies the derived text direction document-wide.
pub struct LocaleStore<S: StorageBackend> {
  backend: S,
}

impl LocaleStore<BrowserStorage> {
  pub fn browser() -> Self {
    Self::new(BrowserStorage)
  }
}

impl<S: StorageBackend> LocaleStore<S> {
  pub fn new(backend: S) -> Self {
    Self { backend }
  }

  pub fn get(&self) -> Lang {
    self
      .backend
      .get(LANG_KEY)
      .map(|v| Lang::parse(&v))
      .unwrap_or_default()
  }

  pub fn set(&self, value: &str) -> Lang {
    let lang = Lang::parse(value);
    self.backend.set(LANG_KEY, lang.as_str());
    apply_direction(lang);
    lang
  }

  /// Reads the persisted language and applies its direction, for process
  /// start.
  pub fn init(&self) -> Lang {
    let lang = self.get();
    apply_direction(lang);
    lang
  }
}

/// Sets the `dir` attribute on the document element.
pub fn apply_direction(lang: Lang) {
  #[cfg(target_arch = "wasm32")]
  {
    if let Some(root) = web_sys::window()
      .and_then(|w| w.document())
      .and_then(|d| d.document_element())
    {
      let _ = root.set_attribute("dir", lang.direction());
    }
  }
  #[cfg(not(target_arch = "wasm32"))]
  let _ = lang;
}

/// App-wide language signal provided from the root component.
pub fn use_lang() -> Signal<Lang> {
  use_context::<Signal<Lang>>()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::storage::MemoryStorage;

  #[test]
  fn defaults_to_french_when_unset() {
    let store = LocaleStore::new(MemoryStorage::new());
    assert_eq!(store.get(), Lang::Fr);
  }

  #[test]
  fn set_normalizes_case_before_persisting() {
    let store = LocaleStore::new(MemoryStorage::new());
    assert_eq!(store.set("AR"), Lang::Ar);
    assert_eq!(store.get(), Lang::Ar);
  }

  #[test]
  fn unrecognized_values_fall_back_to_french() {
    let store = LocaleStore::new(MemoryStorage::new());
    store.set("de");
    assert_eq!(store.get(), Lang::Fr);

    let prefilled = MemoryStorage::new();
    prefilled.set("lang", "zz");
    assert_eq!(LocaleStore::new(prefilled).get(), Lang::Fr);
  }

  #[test]
  fn direction_is_rtl_only_for_arabic() {
    assert_eq!(Lang::Ar.direction(), "rtl");
    assert_eq!(Lang::Fr.direction(), "ltr");
    assert_eq!(Lang::En.direction(), "ltr");
  }
}
