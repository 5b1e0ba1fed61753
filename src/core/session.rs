//! Signed-in session state, persisted between runs.
//!
//! The web client keeps two values in browser storage: the user's email
//! and the auth token. Here they live in a small TOML file under the
//! qrate config directory. A session is only ever fully present or
//! fully absent; rehydrating a file that carries one value but not the
//! other yields a signed-out session.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::SessionError;

/// Email domain accepted for sign-in and registration.
pub const INSTITUTION_DOMAIN: &str = "@queensu.ca";

/// Whether an address belongs to the institution.
#[must_use]
pub fn is_institutional_email(email: &str) -> bool {
    email.trim().to_ascii_lowercase().ends_with(INSTITUTION_DOMAIN)
}

/// The signed-in user's identity and token. Both fields are always
/// present together; a partial session is not representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Institutional email the user signed in with
    pub user_email: String,
    /// Auth token returned by the backend
    pub token: String,
}

/// On-disk shape. Both fields are optional so a hand-edited or
/// partially written file rehydrates as signed-out instead of failing.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// File-backed session store. Commands receive an explicit handle
/// rather than reaching for ambient global state.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    credentials: Option<Credentials>,
}

impl SessionStore {
    /// Rehydrate the session from a file. An unreadable or partial file
    /// yields a signed-out store; this is never an error at startup.
    #[must_use]
    pub fn load_from(path: PathBuf) -> Self {
        let credentials = fs::read_to_string(&path)
            .ok()
            .and_then(|content| toml::from_str::<StoredSession>(&content).ok())
            .and_then(|stored| match (stored.user_email, stored.token) {
                (Some(user_email), Some(token)) => Some(Credentials { user_email, token }),
                _ => None,
            });

        Self { path, credentials }
    }

    /// The signed-in credentials, when a session exists.
    #[must_use]
    pub const fn current(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Whether a session exists.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Gate for protected operations.
    ///
    /// # Errors
    /// [`SessionError::NotSignedIn`] when no session exists.
    pub fn require(&self) -> Result<&Credentials, SessionError> {
        self.current().ok_or(SessionError::NotSignedIn)
    }

    /// Record a successful sign-in: set both fields and persist them in
    /// a single write.
    ///
    /// # Errors
    /// [`SessionError::Storage`] when the session file cannot be
    /// written.
    pub fn login(&mut self, email: &str, token: &str) -> Result<(), SessionError> {
        let stored = StoredSession {
            user_email: Some(email.to_string()),
            token: Some(token.to_string()),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(&stored)?)?;

        self.credentials = Some(Credentials {
            user_email: email.to_string(),
            token: token.to_string(),
        });
        Ok(())
    }

    /// Clear the session from memory and storage. Interactive
    /// confirmation is the caller's job; this is unconditional.
    ///
    /// # Errors
    /// [`SessionError::Storage`] when the session file exists but
    /// cannot be removed.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.credentials = None;
        Ok(())
    }

    /// Where this store persists its session.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let store = SessionStore::load_from(dir.path().join("session.toml"));
        (dir, store)
    }

    #[test]
    fn fresh_store_is_signed_out() {
        let (_dir, store) = temp_store();
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
        assert!(store.require().is_err());
    }

    #[test]
    fn login_then_read_back_yields_both_fields() {
        let (_dir, mut store) = temp_store();
        store.login("a@queensu.ca", "tok1").expect("login");

        let credentials = store.current().expect("credentials");
        assert_eq!(credentials.user_email, "a@queensu.ca");
        assert_eq!(credentials.token, "tok1");
    }

    #[test]
    fn login_persists_and_rehydrates() {
        let (_dir, mut store) = temp_store();
        store.login("a@queensu.ca", "tok1").expect("login");

        let reloaded = SessionStore::load_from(store.path().to_path_buf());
        assert_eq!(
            reloaded.current(),
            Some(&Credentials {
                user_email: "a@queensu.ca".to_string(),
                token: "tok1".to_string(),
            })
        );
    }

    #[test]
    fn logout_clears_state_and_storage() {
        let (_dir, mut store) = temp_store();
        store.login("a@queensu.ca", "tok1").expect("login");
        store.logout().expect("logout");

        assert!(store.current().is_none());
        assert!(!store.path().exists());

        let reloaded = SessionStore::load_from(store.path().to_path_buf());
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn partial_file_rehydrates_as_signed_out() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("session.toml");
        fs::write(&path, "user_email = \"a@queensu.ca\"\n").expect("write partial file");

        let store = SessionStore::load_from(path);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn garbage_file_rehydrates_as_signed_out() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("session.toml");
        fs::write(&path, "not toml at all {{{{").expect("write garbage");

        let store = SessionStore::load_from(path);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn institutional_email_check_accepts_only_the_domain() {
        assert!(is_institutional_email("student@queensu.ca"));
        assert!(is_institutional_email("Student@QueensU.CA"));
        assert!(!is_institutional_email("student@gmail.com"));
        assert!(!is_institutional_email("queensu.ca@gmail.com"));
        assert!(!is_institutional_email(""));
    }
}
