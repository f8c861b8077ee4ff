//! Token storage and the session gate.
//!
//! A session is nothing more than the presence of a non-empty token under
//! [`TOKEN_KEY`](crate::config::TOKEN_KEY). There is no expiry or refresh: a
//! stored token counts as signed in until [`SessionGate::logout`] clears it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config;
use crate::error::Result;
use crate::models::Credentials;
use crate::navigation::{access_for, Access, Screen};
use crate::repository::Authenticator;

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// Holds the single session token.
pub trait SessionStore {
    fn get(&self) -> Result<Option<String>>;
    fn set(&self, token: &str) -> Result<()>;
    /// Remove the token. Succeeds when there is none.
    fn clear(&self) -> Result<()>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn get(&self) -> Result<Option<String>> {
        (**self).get()
    }

    fn set(&self, token: &str) -> Result<()> {
        (**self).set(token)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// Process-local token storage.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.token.borrow().clone())
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// Token storage in a JSON key-value file.
///
/// Other keys in the file are preserved. Writes go to a temp file in the same
/// directory and are renamed into place, so an interrupted write never leaves
/// a truncated file behind.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at the platform default location.
    pub fn default_location() -> Self {
        Self::new(config::default_session_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(serde_json::to_string_pretty(entries)?.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(config::TOKEN_KEY))
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(config::TOKEN_KEY.to_string(), token.to_string());
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(config::TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

// ---------------------------------------------------------------------------
// SessionGate
// ---------------------------------------------------------------------------

/// Decides whether the user is signed in, and signs them in and out.
#[derive(Debug)]
pub struct SessionGate<S> {
    store: S,
}

impl<S: SessionStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored token, if present and non-empty.
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self.store.get()?.filter(|t| !t.is_empty()))
    }

    /// True when a non-empty token is stored.
    ///
    /// A store that cannot be read counts as signed out.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    /// Log in and store the returned token.
    ///
    /// On failure nothing is stored and the error is
    /// [`StorefrontError::Auth`](crate::StorefrontError::Auth).
    pub fn login<A: Authenticator + ?Sized>(
        &self,
        auth: &A,
        credentials: &Credentials,
    ) -> Result<String> {
        let token = auth.login(credentials)?;
        self.store.set(&token)?;
        info!("session token stored");
        Ok(token)
    }

    /// Forget the stored token. Succeeds when none is stored.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        info!("session token cleared");
        Ok(())
    }

    /// Check access to `screen` on entry.
    pub fn enter(&self, screen: Screen) -> Access {
        let access = access_for(screen, self.is_authenticated());
        if let Access::Redirect(to) = access {
            debug!(?screen, ?to, "redirecting");
        }
        access
    }
}
