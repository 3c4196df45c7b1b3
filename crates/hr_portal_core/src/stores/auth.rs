//! crates/hr_portal_core/src/stores/auth.rs
//!
//! The auth store: who is signed in, written through to a `SessionRepository`
//! on every change and rehydrated from it at startup.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

use crate::domain::{AuthState, AuthUser, AuthUserPatch};
use crate::ports::{PortResult, SessionRepository};

struct AuthInner {
    state: AuthState,
    /// Last state known to be in the repository; equal states are not rewritten.
    persisted: Option<AuthState>,
}

#[derive(Clone)]
pub struct AuthStore {
    inner: Arc<Mutex<AuthInner>>,
    /// Held across a repository write; readers only take `inner`.
    writer: Arc<Mutex<()>>,
    repo: Arc<dyn SessionRepository>,
}

impl AuthStore {
    /// Restores the stored session. Absent or unreadable data yields the
    /// logged-out state.
    pub fn rehydrate(repo: Arc<dyn SessionRepository>) -> Self {
        let (state, persisted) = match repo.load_session() {
            Ok(Some(state)) => (state.clone(), Some(state)),
            Ok(None) => (AuthState::logged_out(), None),
            Err(e) => {
                warn!("Discarding stored auth session: {}", e);
                (AuthState::logged_out(), None)
            }
        };
        debug!(authenticated = state.is_authenticated(), "Auth store rehydrated");
        Self {
            inner: Arc::new(Mutex::new(AuthInner { state, persisted })),
            writer: Arc::new(Mutex::new(())),
            repo,
        }
    }

    pub fn state(&self) -> AuthState {
        self.lock().state.clone()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.lock().state.user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().state.is_authenticated()
    }

    /// Signs `user` in. No credential check is made.
    pub fn login(&self, user: AuthUser) -> PortResult<()> {
        self.mutate(|state| *state = AuthState::signed_in(user))
    }

    pub fn logout(&self) -> PortResult<()> {
        self.mutate(|state| *state = AuthState::logged_out())
    }

    /// Merges `patch` into the current user. Does nothing while logged out.
    pub fn update_user(&self, patch: &AuthUserPatch) -> PortResult<()> {
        self.mutate(|state| {
            if let Some(user) = state.user_mut() {
                user.apply(patch);
            }
        })
    }

    /// Applies `change` in memory, then writes the result through. A failed
    /// write is returned, but the in-memory change stands.
    ///
    /// Writers are serialized so the repository sees changes in order; the
    /// state lock is released before the write, so reads never wait on I/O.
    fn mutate(&self, change: impl FnOnce(&mut AuthState)) -> PortResult<()> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let snapshot = {
            let mut inner = self.lock();
            change(&mut inner.state);
            if inner.persisted.as_ref() == Some(&inner.state) {
                return Ok(());
            }
            inner.state.clone()
        };
        self.repo.save_session(&snapshot)?;
        self.lock().persisted = Some(snapshot);
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AuthInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
