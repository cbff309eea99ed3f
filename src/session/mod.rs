//! Process-wide authentication state with a durable mirror.
//!
//! One account at a time may be logged in. The current account is
//! mirrored into a durable slot so a restart can restore it;
//! rehydration happens once, when the manager is constructed.

use crate::models::Account;
use crate::store::ListingStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Durable slot holding at most one serialized account snapshot.
/// This seam allows other backings (a real browser store, a database)
/// without touching the session logic.
pub trait SessionSlot {
    /// Read the stored snapshot, if any
    fn load(&self) -> Result<Option<Account>>;

    /// Replace the snapshot
    fn store(&self, account: &Account) -> Result<()>;

    /// Remove the snapshot
    fn clear(&self) -> Result<()>;
}

/// JSON-file slot, the stand-in for the browser's `currentUser` key
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionSlot for FileSlot {
    fn load(&self) -> Result<Option<Account>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session slot {}", self.path.display()))?;
        // Malformed content means no session, never an error
        match serde_json::from_str(&raw) {
            Ok(account) => Ok(Some(account)),
            Err(err) => {
                warn!("Discarding malformed session slot: {err}");
                Ok(None)
            }
        }
    }

    fn store(&self, account: &Account) -> Result<()> {
        let json = serde_json::to_string_pretty(account)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write session slot {}", self.path.display()))
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to clear session slot {}", self.path.display()))?;
        }
        Ok(())
    }
}

/// Holds the current session and keeps the slot in sync
pub struct SessionManager<S: SessionSlot> {
    slot: S,
    current: Option<Account>,
}

impl<S: SessionSlot> SessionManager<S> {
    /// Build a manager, rehydrating any session the slot still holds
    pub fn restore(slot: S) -> Result<Self> {
        let current = slot.load()?;
        match &current {
            Some(account) => info!("Restored session for {}", account.email),
            None => debug!("No stored session"),
        }
        Ok(Self { slot, current })
    }

    /// Log in by email. The password is accepted but never checked;
    /// no credential store exists in this model. A miss leaves the
    /// prior session untouched and returns `None`.
    pub fn login(
        &mut self,
        store: &ListingStore,
        email: &str,
        _password: &str,
    ) -> Result<Option<Account>> {
        match store.account_by_email(email) {
            Some(account) => {
                let account = account.clone();
                self.slot.store(&account)?;
                info!("Logged in {}", account.email);
                self.current = Some(account.clone());
                Ok(Some(account))
            }
            None => {
                debug!("Login miss for {email}");
                Ok(None)
            }
        }
    }

    /// Register a new account and log it in. Always succeeds; the
    /// password is discarded, not stored.
    pub fn register(
        &mut self,
        store: &mut ListingStore,
        name: &str,
        email: &str,
        phone: &str,
        _password: &str,
    ) -> Result<Account> {
        let account = store.add_account(name, email, phone);
        self.slot.store(&account)?;
        info!("Registered and logged in {}", account.email);
        self.current = Some(account.clone());
        Ok(account)
    }

    /// Drop the session and clear the slot
    pub fn logout(&mut self) -> Result<()> {
        if let Some(account) = self.current.take() {
            info!("Logged out {}", account.email);
        }
        self.slot.clear()
    }

    /// The logged-in account, if any
    pub fn current(&self) -> Option<&Account> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn slot_in(dir: &tempfile::TempDir) -> FileSlot {
        FileSlot::new(dir.path().join("currentUser.json"))
    }

    #[test]
    fn login_ignores_the_password() {
        let dir = tempdir().unwrap();
        let mut store = ListingStore::new();
        store.add_account("Asha", "a@x.com", "999");
        let mut session = SessionManager::restore(slot_in(&dir)).unwrap();

        let account = session.login(&store, "a@x.com", "anything").unwrap();
        assert_eq!(account.unwrap().name, "Asha");
        assert_eq!(session.current().unwrap().email, "a@x.com");
    }

    #[test]
    fn login_miss_keeps_the_prior_session() {
        let dir = tempdir().unwrap();
        let store = ListingStore::seeded();
        let mut session = SessionManager::restore(slot_in(&dir)).unwrap();

        session.login(&store, "rahul@example.com", "pw").unwrap();
        let miss = session.login(&store, "nobody@example.com", "pw").unwrap();
        assert!(miss.is_none());
        assert_eq!(session.current().unwrap().email, "rahul@example.com");
    }

    #[test]
    fn register_logs_the_new_account_in() {
        let dir = tempdir().unwrap();
        let mut store = ListingStore::seeded();
        let mut session = SessionManager::restore(slot_in(&dir)).unwrap();

        let account = session
            .register(&mut store, "Asha", "a@x.com", "999", "secret")
            .unwrap();
        assert_eq!(account.id, "3");
        assert_eq!(session.current().unwrap().email, "a@x.com");
        // later login with any password resolves the same account
        assert_eq!(
            session.login(&store, "a@x.com", "other").unwrap().unwrap().id,
            "3"
        );
    }

    #[test]
    fn session_survives_a_restart_via_the_slot() {
        let dir = tempdir().unwrap();
        let store = ListingStore::seeded();
        let mut session = SessionManager::restore(slot_in(&dir)).unwrap();
        session.login(&store, "priya@example.com", "pw").unwrap();
        drop(session);

        let revived = SessionManager::restore(slot_in(&dir)).unwrap();
        assert_eq!(revived.current().unwrap().email, "priya@example.com");
    }

    #[test]
    fn logout_clears_the_slot_for_good() {
        let dir = tempdir().unwrap();
        let store = ListingStore::seeded();
        let mut session = SessionManager::restore(slot_in(&dir)).unwrap();
        session.login(&store, "priya@example.com", "pw").unwrap();
        session.logout().unwrap();
        assert!(session.current().is_none());

        let revived = SessionManager::restore(slot_in(&dir)).unwrap();
        assert!(revived.current().is_none());
    }

    #[test]
    fn malformed_slot_content_means_no_session() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("currentUser.json");
        std::fs::write(&path, "{not json").unwrap();

        let session = SessionManager::restore(FileSlot::new(&path)).unwrap();
        assert!(session.current().is_none());
    }
}
