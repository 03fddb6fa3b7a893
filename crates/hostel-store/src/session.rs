//! # Session Persistence
//!
//! The signed-in identity lives in a small key-value store under the key
//! `"user"`, so it survives restarts when the file backend is used.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Storage                                      │
//! │                                                                         │
//! │   SessionStore<K>                                                       │
//! │   ├── current()  → Option<Session>   (corrupt entry ⇒ signed out)       │
//! │   ├── save(&Session)                                                    │
//! │   └── clear()                                                           │
//! │          │                                                              │
//! │          ▼  KeyValueStore                                               │
//! │   ┌──────────────┐        ┌──────────────────────────────┐             │
//! │   │  MemoryKv    │        │  FileKv                      │             │
//! │   │  (tests,     │        │  one JSON object on disk     │             │
//! │   │   ephemeral) │        │  {"user": "{\"role\":...}"}  │             │
//! │   └──────────────┘        └──────────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use hostel_core::session::SESSION_KEY;
use hostel_core::Session;
use tracing::{debug, warn};

use crate::error::StoreResult;

// =============================================================================
// Key-Value Port
// =============================================================================

/// Minimal string key-value storage, shaped like browser local storage.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Box<K> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// Process-local storage. Cloned handles share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .entries
            .read()
            .expect("Session lock poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .expect("Session lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries
            .write()
            .expect("Session lock poisoned")
            .remove(key);
        Ok(())
    }
}

/// File-backed storage: the whole map is one JSON object.
///
/// A missing file reads as an empty map. Every write rewrites the file.
#[derive(Debug, Clone)]
pub struct FileKv {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileKv {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileKv {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> StoreResult<()> {
        let _guard = self.write_lock.lock().expect("Session file lock poisoned");
        let mut entries = self.load()?;
        f(&mut entries);
        self.write(&entries)
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}

// =============================================================================
// Session Store
// =============================================================================

/// Reads and writes the persisted [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore<K> {
    kv: K,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(kv: K) -> Self {
        SessionStore { kv }
    }

    /// The signed-in session, if any.
    ///
    /// An entry that does not parse is treated as no session; the caller
    /// then redirects to login.
    pub fn current(&self) -> StoreResult<Option<Session>> {
        let Some(raw) = self.kv.get(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable session entry");
                Ok(None)
            }
        }
    }

    pub fn save(&self, session: &Session) -> StoreResult<()> {
        debug!(username = %session.username, role = %session.role, "Persisting session");
        self.kv.set(SESSION_KEY, &serde_json::to_string(session)?)
    }

    pub fn clear(&self) -> StoreResult<()> {
        debug!("Clearing session");
        self.kv.remove(SESSION_KEY)
    }

    pub fn backend(&self) -> &K {
        &self.kv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_core::Role;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("hostel-store-{}", uuid::Uuid::new_v4()))
            .join("session.json")
    }

    #[test]
    fn test_save_then_current() {
        let store = SessionStore::new(MemoryKv::new());
        assert_eq!(store.current().unwrap(), None);

        let session = Session::new(Role::Owner, "owner");
        store.save(&session).unwrap();
        assert_eq!(store.current().unwrap(), Some(session));

        let raw = store.backend().get("user").unwrap().unwrap();
        assert_eq!(raw, r#"{"role":"owner","username":"owner"}"#);
    }

    #[test]
    fn test_clear() {
        let store = SessionStore::new(MemoryKv::new());
        store.save(&Session::new(Role::Tenant, "tenant")).unwrap();
        store.clear().unwrap();
        assert_eq!(store.current().unwrap(), None);
    }

    #[test]
    fn test_corrupt_entry_reads_as_signed_out() {
        let kv = MemoryKv::new();
        kv.set("user", "{not json").unwrap();
        let store = SessionStore::new(kv);
        assert_eq!(store.current().unwrap(), None);
    }

    #[test]
    fn test_legacy_type_field_accepted() {
        let kv = MemoryKv::new();
        kv.set("user", r#"{"type":"tenant","username":"tenant"}"#)
            .unwrap();
        let store = SessionStore::new(kv);
        assert_eq!(
            store.current().unwrap(),
            Some(Session::new(Role::Tenant, "tenant"))
        );
    }

    #[test]
    fn test_file_backend_survives_reopen() {
        let path = temp_path();
        let session = Session::new(Role::Owner, "owner");

        SessionStore::new(FileKv::new(&path)).save(&session).unwrap();
        let reopened = SessionStore::new(FileKv::new(&path));
        assert_eq!(reopened.current().unwrap(), Some(session));

        reopened.clear().unwrap();
        assert_eq!(reopened.current().unwrap(), None);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_file_backend_missing_file_is_empty() {
        let kv = FileKv::new(temp_path());
        assert_eq!(kv.get("user").unwrap(), None);
    }
}
