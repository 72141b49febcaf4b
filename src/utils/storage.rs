// ============================================================================
// STORAGE - Acceso a almacenamiento persistente clave/valor
// ============================================================================
// El estado de sesión escribe a través de este seam para que los tests
// nativos puedan sustituir localStorage por un store en memoria.
// ============================================================================

use std::rc::Rc;

/// Clave del token de acceso persistido
pub const STORAGE_KEY_TOKEN: &str = "authToken";
/// Clave del hint de nombre de usuario persistido
pub const STORAGE_KEY_USERNAME: &str = "username";

/// Almacenamiento persistente de strings (localStorage en el navegador)
pub trait KeyStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub type SharedKeyStore = Rc<dyn KeyStore>;

/// Implementación sobre window.localStorage
#[cfg(target_arch = "wasm32")]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if storage.set_item(key, value).is_err() {
                log::error!("❌ Error guardando '{}' en localStorage", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Store en memoria para tests nativos (sustituye a localStorage)
#[cfg(test)]
pub struct MemoryStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self(std::cell::RefCell::new(std::collections::HashMap::new()))
    }

    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (k, v) in entries {
            store.set(k, v);
        }
        store
    }
}

#[cfg(test)]
impl KeyStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}
