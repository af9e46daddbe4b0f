//! File-backed session profile.
//!
//! The signed-in identity (id, name, email, authenticated flag) is held in an
//! explicit [`SessionContext`] that is hydrated from a JSON key-value file at
//! startup and passed to whatever needs it. There is no ambient singleton:
//! construction and initialization are both explicit, and a missing or
//! unreadable store simply yields the anonymous profile.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no usable config directory for the session store")]
    NoConfigDir,
    #[error("session store i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("session store is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The persisted identity fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

/// Durable key-value store for the session profile, one JSON file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store under the user's config directory.
    pub fn default_location() -> Result<Self, SessionError> {
        let dir = dirs::config_dir().ok_or(SessionError::NoConfigDir)?;
        Ok(Self {
            path: dir.join("yardlog").join("session.json"),
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the stored profile. Absent file means no profile.
    pub fn load(&self) -> Result<Option<SessionProfile>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    pub fn save(&self, profile: &SessionProfile) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Explicit session context: hydrate from the store on startup, else
/// anonymous.
pub struct SessionContext {
    store: SessionStore,
    profile: SessionProfile,
}

impl SessionContext {
    pub fn hydrate(store: SessionStore) -> Self {
        let profile = match store.load() {
            Ok(Some(p)) => p,
            Ok(None) => SessionProfile::default(),
            Err(e) => {
                warn!(error = %e, "session store unreadable, starting anonymous");
                SessionProfile::default()
            }
        };
        Self { store, profile }
    }

    pub fn profile(&self) -> &SessionProfile {
        &self.profile
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile.is_authenticated
    }

    /// Display name for the header: user name, else email, else "anonymous".
    pub fn display_name(&self) -> &str {
        self.profile
            .user_name
            .as_deref()
            .or(self.profile.email.as_deref())
            .unwrap_or("anonymous")
    }

    /// Persists a fresh profile from the auth endpoint. Store failures keep
    /// the in-memory profile and are logged, never fatal.
    pub fn save_profile(&mut self, profile: SessionProfile) {
        if let Err(e) = self.store.save(&profile) {
            warn!(error = %e, "could not persist session profile");
        }
        self.profile = profile;
    }

    /// Logout: clears the store and resets to anonymous.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "could not clear session store");
        }
        self.profile = SessionProfile::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SessionProfile {
        SessionProfile {
            user_id: Some("u-117".to_string()),
            user_name: Some("R. Vasquez".to_string()),
            email: Some("rvasquez@yard.example".to_string()),
            is_authenticated: true,
        }
    }

    #[test]
    fn hydrate_missing_store_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = SessionContext::hydrate(SessionStore::at(dir.path().join("session.json")));
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.display_name(), "anonymous");
    }

    #[test]
    fn save_then_hydrate_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut ctx = SessionContext::hydrate(SessionStore::at(&path));
        ctx.save_profile(profile());
        assert_eq!(ctx.display_name(), "R. Vasquez");

        let again = SessionContext::hydrate(SessionStore::at(&path));
        assert_eq!(again.profile(), &profile());
        assert!(again.is_authenticated());
    }

    #[test]
    fn logout_clears_store_and_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut ctx = SessionContext::hydrate(SessionStore::at(&path));
        ctx.save_profile(profile());
        ctx.logout();
        assert!(!ctx.is_authenticated());
        assert!(!path.exists());

        let again = SessionContext::hydrate(SessionStore::at(&path));
        assert_eq!(again.display_name(), "anonymous");
    }

    #[test]
    fn corrupt_store_degrades_to_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        let ctx = SessionContext::hydrate(SessionStore::at(&path));
        assert!(!ctx.is_authenticated());
    }
}
