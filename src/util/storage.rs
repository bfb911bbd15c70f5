//! Persistent token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session owns exactly one persisted value, the bearer token. Clearing
//! the session also wipes every other piece of client-local state: session
//! storage and all cookies visible on the app's path. [`BrowserStore`] does
//! this against the real browser under `csr`; [`MemoryStore`] is the
//! in-process stand-in used natively.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Why a token could not be persisted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("persistent storage is not available")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Rejected(String),
}

/// A single-slot token store plus the rest of the client-local state.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write did not land; the previous
    /// token, if any, is left in place.
    fn set_token(&self, token: &str) -> Result<(), StorageError>;
    /// Remove the token and every other client-local key and cookie.
    fn clear_all(&self);
}

/// `localStorage` / `sessionStorage` / `document.cookie` backed store.
#[derive(Clone, Debug)]
pub struct BrowserStore {
    token_key: String,
}

impl BrowserStore {
    pub fn new(token_key: impl Into<String>) -> Self {
        Self {
            token_key: token_key.into(),
        }
    }
}

impl TokenStore for BrowserStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage
                .get_item(&self.token_key)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.token_key;
            None
        }
    }

    fn set_token(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(&self.token_key, token)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.token_key, token);
            Err(StorageError::Unavailable)
        }
    }

    fn clear_all(&self) {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(window) = web_sys::window() else {
                return;
            };
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(&self.token_key);
            }
            if let Ok(Some(storage)) = window.session_storage() {
                let _ = storage.clear();
            }
            let Some(doc) = window
                .document()
                .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            else {
                return;
            };
            let cookies = doc.cookie().unwrap_or_default();
            for directive in expire_cookie_directives(&cookies) {
                let _ = doc.set_cookie(&directive);
            }
        }
    }
}

/// `Set-Cookie`-style directives that expire every cookie in a
/// `document.cookie` string on path `/`.
pub fn expire_cookie_directives(cookies: &str) -> Vec<String> {
    cookies
        .split(';')
        .filter_map(|pair| {
            let name = pair.trim_start().split('=').next().unwrap_or_default().trim_end();
            if name.is_empty() {
                None
            } else {
                Some(format!("{name}=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/"))
            }
        })
        .collect()
}

/// In-memory store mirroring the browser's three kinds of client state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    token: Option<String>,
    items: BTreeMap<String, String>,
    cookies: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.lock().token = Some(token.to_owned());
        store
    }

    pub fn set_item(&self, key: &str, value: &str) {
        self.lock().items.insert(key.to_owned(), value.to_owned());
    }

    pub fn item(&self, key: &str) -> Option<String> {
        self.lock().items.get(key).cloned()
    }

    pub fn set_cookie(&self, name: &str, value: &str) {
        self.lock().cookies.insert(name.to_owned(), value.to_owned());
    }

    pub fn cookie_count(&self) -> usize {
        self.lock().cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        let state = self.lock();
        state.token.is_none() && state.items.is_empty() && state.cookies.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.lock().token = Some(token.to_owned());
        Ok(())
    }

    fn clear_all(&self) {
        let mut state = self.lock();
        state.token = None;
        state.items.clear();
        state.cookies.clear();
    }
}
