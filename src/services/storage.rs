use std::rc::Rc;

use kotoba_core::models::UserIdentity;
use kotoba_core::state::{MemorySessionStore, SessionStore};
use kotoba_core::{AppConfig, ConfigError, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Persists the session as JSON in `window.localStorage`.
pub struct LocalStorageSessionStore {
    key: String,
    storage: Storage,
}

impl LocalStorageSessionStore {
    pub fn open(key: impl Into<String>) -> Result<Self, StorageError> {
        Ok(Self {
            key: key.into(),
            storage: local_storage()?,
        })
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Result<Option<UserIdentity>, StorageError> {
        let Some(json) = self.storage.get_item(&self.key).map_err(access_error)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, identity: &UserIdentity) -> Result<(), StorageError> {
        let json = serde_json::to_string(identity)?;
        self.storage.set_item(&self.key, &json).map_err(access_error)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key).map_err(access_error)
    }
}

/// localStorage if the browser allows it, else an in-memory store.
pub fn session_store(key: &str) -> Rc<dyn SessionStore> {
    match LocalStorageSessionStore::open(key) {
        Ok(store) => Rc::new(store),
        Err(e) => {
            tracing::warn!("Session will not survive a reload: {}", e);
            Rc::new(MemorySessionStore::new())
        }
    }
}

/// Read the optional configuration override.
///
/// A missing override (or no storage at all) is `Ok(None)`; only a present
/// but unparsable document is an error.
pub fn load_config() -> Result<Option<AppConfig>, ConfigError> {
    let Ok(storage) = local_storage() else {
        return Ok(None);
    };
    match storage.get_item(AppConfig::OVERRIDE_KEY) {
        Ok(Some(json)) => AppConfig::from_json(&json).map(Some),
        Ok(None) | Err(_) => Ok(None),
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(access_error)?
        .ok_or(StorageError::Unavailable)
}

fn access_error(e: JsValue) -> StorageError {
    StorageError::Access(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}
