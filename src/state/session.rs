//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionManager`] is the single owner of the token lifecycle. Route
//! guards and the dashboard read the derived [`AuthState`] through
//! [`SessionManager::subscribe`] (mirrored into an `RwSignal` by the app
//! root) rather than touching storage directly.
//!
//! CONCURRENCY
//! ===========
//! Every session-mutating call takes a generation ticket. A login/register
//! response is committed only if its ticket is still the latest, so a stale
//! response can never overwrite a newer sign-in or resurrect a session after
//! logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::net::auth::{AuthAction, AuthApi};
use crate::net::error::ClientError;
use crate::net::http::HttpClient;
use crate::net::types::Credentials;
use crate::util::storage::TokenStore;

/// Derived view of the session: signed in exactly when a token is held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    pub fn from_token(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

type Listener = Box<dyn Fn(&AuthState) + Send + Sync>;

/// Owns the token store and the auth client; the only writer of the session.
pub struct SessionManager<C, S> {
    api: AuthApi<C>,
    store: S,
    state: Mutex<AuthState>,
    generation: AtomicU64,
    listeners: Mutex<Vec<Listener>>,
}

impl<C: HttpClient, S: TokenStore> SessionManager<C, S> {
    /// Restore the session from whatever token `store` already holds.
    pub fn new(api: AuthApi<C>, store: S) -> Self {
        let state = AuthState::from_token(store.token());
        log::info!("session restored (authenticated: {})", state.is_authenticated());
        Self {
            api,
            store,
            state: Mutex::new(state),
            generation: AtomicU64::new(0),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn state(&self) -> AuthState {
        lock(&self.state).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        lock(&self.state).is_authenticated()
    }

    /// Register a callback run after every session change.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + Send + Sync + 'static) {
        lock(&self.listeners).push(Box::new(listener));
    }

    /// Sign in with existing credentials.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ClientError`]; the session is unchanged on error.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ClientError> {
        self.authenticate(AuthAction::Login, email, password).await
    }

    /// Create an account and sign in with it.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ClientError`]; the session is unchanged on error.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ClientError> {
        self.authenticate(AuthAction::Register, email, password).await
    }

    /// Drop the token and all other client-local state. Never fails.
    pub fn logout(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.store.clear_all();
        self.commit(AuthState::default());
        log::info!("signed out");
    }

    async fn authenticate(&self, action: AuthAction, email: &str, password: &str) -> Result<(), ClientError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let credentials = Credentials::new(email, password);
        let token = self.api.exchange(action, &credentials).await?;

        if self.generation.load(Ordering::SeqCst) != ticket {
            log::warn!("discarding {} response superseded by a newer session change", action.path());
            return Err(ClientError::Superseded);
        }

        if let Err(e) = self.store.set_token(&token) {
            log::error!("{} succeeded but the token was not persisted: {e}", action.path());
            return Err(e.into());
        }
        self.commit(AuthState::from_token(Some(token)));
        log::info!("signed in via {}", action.path());
        Ok(())
    }

    fn commit(&self, next: AuthState) {
        *lock(&self.state) = next.clone();
        for listener in lock(&self.listeners).iter() {
            listener(&next);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
