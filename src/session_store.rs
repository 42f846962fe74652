//! Session state for the Orpheus dashboard
//!
//! The session is two entries in a key/value backend: an authenticated flag
//! (boolean-as-string) and the public identifier chosen at signup. Every
//! mutation is written through and flushed immediately so a process restart
//! preserves the session; the route guard reads the backend synchronously on
//! each request.
//!
//! Login performs length-only validation of the supplied secret. There is no
//! credential to verify against: any sufficiently long string authenticates.
//! That is the documented placeholder contract of the product demo, not a
//! security mechanism.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::errors::{OrpheusError, OrpheusResult};

/// Storage key for the authenticated flag.
pub const AUTH_KEY: &str = "orpheus_authenticated";
/// Storage key for the public identifier.
pub const PUBLIC_ID_KEY: &str = "orpheus_public_key";
/// Minimum accepted login secret length.
pub const MIN_SECRET_LEN: usize = 32;

/// Key/value persistence behind the session store.
pub trait SessionBackend: Send + Sync {
    fn get(&self, key: &str) -> OrpheusResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> OrpheusResult<()>;
    fn delete(&self, key: &str) -> OrpheusResult<()>;
}

/// Sled-backed session persistence.
pub struct SledSessionBackend {
    db: sled::Db,
}

impl SledSessionBackend {
    pub fn open<P: AsRef<Path>>(path: P) -> OrpheusResult<Self> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

impl SessionBackend for SledSessionBackend {
    fn get(&self, key: &str) -> OrpheusResult<Option<String>> {
        let value = self.db.get(key)?;
        Ok(value.map(|v| String::from_utf8_lossy(&v).into_owned()))
    }

    fn put(&self, key: &str, value: &str) -> OrpheusResult<()> {
        self.db.insert(key, value.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }

    fn delete(&self, key: &str) -> OrpheusResult<()> {
        self.db.remove(key)?;
        self.db.flush()?;
        Ok(())
    }
}

/// In-memory session persistence for tests and ephemeral runs.
#[derive(Default)]
pub struct MemorySessionBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemorySessionBackend {
    fn get(&self, key: &str) -> OrpheusResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> OrpheusResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> OrpheusResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// Point-in-time view of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_authenticated: bool,
    pub public_identifier: Option<String>,
}

/// The session service injected into the route guard and handlers.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Open a sled-backed store at `path`.
    pub fn open_sled<P: AsRef<Path>>(path: P) -> OrpheusResult<Self> {
        Ok(Self::new(Arc::new(SledSessionBackend::open(path)?)))
    }

    /// In-memory store, mainly for tests.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionBackend::new()))
    }

    /// Authenticate with a supplied secret. Fails validation when the secret
    /// is shorter than [`MIN_SECRET_LEN`]; otherwise accepts any content.
    pub fn login(&self, secret: &str) -> OrpheusResult<()> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(OrpheusError::validation(
                "private_key",
                "Invalid private key format",
            ));
        }
        self.backend.put(AUTH_KEY, "true")?;
        tracing::info!("session authenticated via login");
        Ok(())
    }

    /// Finish signup: requires the caller to have acknowledged that the
    /// generated secret was saved. Enforced here, not in the UI.
    pub fn complete_signup(&self, public_identifier: &str, acknowledged: bool) -> OrpheusResult<()> {
        if !acknowledged {
            return Err(OrpheusError::validation(
                "acknowledged",
                "private key must be saved before continuing",
            ));
        }
        self.backend.put(PUBLIC_ID_KEY, public_identifier)?;
        self.backend.put(AUTH_KEY, "true")?;
        tracing::info!(public_identifier, "session authenticated via signup");
        Ok(())
    }

    /// Clear the session unconditionally. Idempotent.
    pub fn logout(&self) -> OrpheusResult<()> {
        self.backend.delete(AUTH_KEY)?;
        self.backend.delete(PUBLIC_ID_KEY)?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// Synchronous read used by the route guard. A backend fault reads as
    /// unauthenticated rather than surfacing an error.
    pub fn is_authenticated(&self) -> bool {
        match self.backend.get(AUTH_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!(error = %e, "session backend read failed; treating as unauthenticated");
                false
            }
        }
    }

    pub fn public_identifier(&self) -> Option<String> {
        self.backend.get(PUBLIC_ID_KEY).ok().flatten()
    }

    pub fn snapshot(&self) -> Session {
        Session {
            is_authenticated: self.is_authenticated(),
            public_identifier: self.public_identifier(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rejects_short_secret() {
        let store = SessionStore::in_memory();
        let err = store.login("too-short").unwrap_err();
        assert!(matches!(err, OrpheusError::Validation { .. }));
        assert!(!store.is_authenticated());
        assert_eq!(store.public_identifier(), None);
    }

    #[test]
    fn test_login_accepts_any_long_secret() {
        let store = SessionStore::in_memory();
        // Content is not verified, only length.
        store.login("not-hex-at-all-but-32-chars-long").unwrap();
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_boundary_secret_length() {
        let store = SessionStore::in_memory();
        assert!(store.login(&"a".repeat(MIN_SECRET_LEN - 1)).is_err());
        assert!(store.login(&"a".repeat(MIN_SECRET_LEN)).is_ok());
    }

    #[test]
    fn test_complete_signup_requires_acknowledgment() {
        let store = SessionStore::in_memory();
        let err = store.complete_signup("abcdef", false).unwrap_err();
        assert!(matches!(err, OrpheusError::Validation { .. }));
        assert!(!store.is_authenticated());
        assert_eq!(store.public_identifier(), None);
    }

    #[test]
    fn test_complete_signup_stores_identifier() {
        let store = SessionStore::in_memory();
        store.complete_signup("abcdef0123", true).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.public_identifier().as_deref(), Some("abcdef0123"));
    }

    #[test]
    fn test_logout_clears_everything_and_is_idempotent() {
        let store = SessionStore::in_memory();
        store.complete_signup("abcdef0123", true).unwrap();

        store.logout().unwrap();
        assert!(!store.is_authenticated());
        assert_eq!(store.public_identifier(), None);

        // Logging out of an empty session is fine.
        store.logout().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let store = SessionStore::in_memory();
        assert_eq!(
            store.snapshot(),
            Session {
                is_authenticated: false,
                public_identifier: None
            }
        );

        store.complete_signup("cafe", true).unwrap();
        let snap = store.snapshot();
        assert!(snap.is_authenticated);
        assert_eq!(snap.public_identifier.as_deref(), Some("cafe"));
    }

    #[test]
    fn test_sled_backend_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = SessionStore::open_sled(dir.path()).unwrap();
            store.complete_signup("deadbeef", true).unwrap();
        }

        let store = SessionStore::open_sled(dir.path()).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.public_identifier().as_deref(), Some("deadbeef"));
    }
}
