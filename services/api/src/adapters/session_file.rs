//! services/api/src/adapters/session_file.rs
//!
//! A `SessionRepository` that keeps the client session in a JSON file named
//! after the session namespace, e.g. `.hr-portal/auth-storage.json`.
//!
//! The file holds `{"state": {"user": ..., "isAuthenticated": ...}, "version": 0}`.
//! Several processes may share one file; the last writer wins.

use hr_portal_core::domain::{AuthState, AuthUser};
use hr_portal_core::ports::{PortError, PortResult, SessionRepository};
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

const STORAGE_VERSION: u32 = 0;

//=========================================================================================
// "Impure" Storage Record Structs
//=========================================================================================

#[derive(Serialize, Deserialize)]
struct SessionRecord {
    state: AuthRecord,
    #[serde(default)]
    version: u32,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthRecord {
    user: Option<AuthUser>,
    is_authenticated: bool,
}

impl SessionRecord {
    fn from_domain(state: &AuthState) -> Self {
        Self {
            state: AuthRecord {
                user: state.user().cloned(),
                is_authenticated: state.is_authenticated(),
            },
            version: STORAGE_VERSION,
        }
    }

    /// The flag is derived on the way in; a stored `true` without a user is logged out.
    fn to_domain(self) -> AuthState {
        match self.state.user {
            Some(user) if self.state.is_authenticated => AuthState::signed_in(user),
            _ => AuthState::logged_out(),
        }
    }
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

#[derive(Clone, Debug)]
pub struct FileSessionRepository {
    path: PathBuf,
}

impl FileSessionRepository {
    /// Stores the session under `dir`, in `<namespace>.json`.
    pub fn new(dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{namespace}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionRepository for FileSessionRepository {
    fn load_session(&self) -> PortResult<Option<AuthState>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PortError::Storage(e.to_string())),
        };
        let record: SessionRecord = serde_json::from_str(&raw).map_err(|e| {
            PortError::Storage(format!("malformed session in {}: {}", self.path.display(), e))
        })?;
        Ok(Some(record.to_domain()))
    }

    fn save_session(&self, state: &AuthState) -> PortResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(storage_error)?;
        let json = serde_json::to_vec_pretty(&SessionRecord::from_domain(state))
            .map_err(|e| PortError::Storage(e.to_string()))?;

        // Each write gets its own temp file in the target directory, then a rename.
        let mut tmp = NamedTempFile::new_in(dir).map_err(storage_error)?;
        tmp.write_all(&json).map_err(storage_error)?;
        tmp.persist(&self.path).map_err(|e| storage_error(e.error))?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }
}

fn storage_error(e: std::io::Error) -> PortError {
    PortError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_portal_core::stores::AuthStore;
    use std::sync::Arc;
    use std::thread;

    fn user() -> AuthUser {
        AuthUser {
            id: "1".into(),
            name: "Admin User".into(),
            email: "a@b.com".into(),
            role: "HR Manager".into(),
        }
    }

    #[test]
    fn missing_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path(), "auth-storage");
        assert_eq!(repo.load_session().unwrap(), None);
    }

    #[test]
    fn round_trips_a_signed_in_session_in_the_stored_shape() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path(), "auth-storage");
        repo.save_session(&AuthState::signed_in(user())).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(raw["state"]["isAuthenticated"], true);
        assert_eq!(raw["state"]["user"]["email"], "a@b.com");
        assert_eq!(raw["version"], 0);

        assert_eq!(repo.load_session().unwrap(), Some(AuthState::signed_in(user())));
    }

    #[test]
    fn malformed_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path(), "auth-storage");
        std::fs::write(repo.path(), "{not json").unwrap();
        assert!(matches!(repo.load_session(), Err(PortError::Storage(_))));
    }

    #[test]
    fn authenticated_flag_without_user_loads_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path(), "auth-storage");
        std::fs::write(
            repo.path(),
            r#"{"state":{"user":null,"isAuthenticated":true},"version":0}"#,
        )
        .unwrap();
        assert_eq!(repo.load_session().unwrap(), Some(AuthState::logged_out()));
    }

    #[test]
    fn auth_store_login_logout_reload_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(FileSessionRepository::new(dir.path(), "auth-storage"));

        let store = AuthStore::rehydrate(repo.clone());
        store.login(user()).unwrap();
        store.logout().unwrap();

        let reloaded = AuthStore::rehydrate(repo);
        assert!(!reloaded.is_authenticated());
        assert_eq!(reloaded.user(), None);
    }

    #[test]
    fn concurrent_writers_sharing_a_directory_never_fail() {
        let dir = tempfile::tempdir().unwrap();
        let writers: Vec<_> = (0..4)
            .map(|n| {
                let repo = FileSessionRepository::new(dir.path(), "auth-storage");
                thread::spawn(move || {
                    let signed_in = AuthState::signed_in(AuthUser {
                        email: format!("writer{n}@b.com"),
                        ..user()
                    });
                    let mut failures = 0;
                    for i in 0..200 {
                        let state = if i % 2 == 0 {
                            signed_in.clone()
                        } else {
                            AuthState::logged_out()
                        };
                        if repo.save_session(&state).is_err() {
                            failures += 1;
                        }
                    }
                    failures
                })
            })
            .collect();

        let failures: Vec<usize> = writers.into_iter().map(|w| w.join().unwrap()).collect();
        assert_eq!(failures, [0, 0, 0, 0]);

        let repo = FileSessionRepository::new(dir.path(), "auth-storage");
        assert!(repo.load_session().unwrap().is_some());
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
