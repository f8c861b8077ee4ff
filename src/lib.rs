//! Storefront SDK for Rust.
//!
//! Provides a blocking client for a product storefront REST API: browse and
//! filter the catalog, sign in as an administrator, and create, update or
//! delete products. The only local state is the session token.
//!
//! # Quick start
//!
//! ```no_run
//! use storefront_sdk::filter::filter;
//! use storefront_sdk::{Credentials, StorefrontSdk};
//!
//! let sdk = StorefrontSdk::builder().build();
//!
//! // Browse
//! let catalog = sdk.products().list().unwrap();
//! let shirts = filter(&catalog, "shirt", Some("men's clothing"));
//!
//! // Sign in
//! sdk.login(&Credentials::new("johnd", "m38rmF$")).unwrap();
//! assert!(sdk.session().is_authenticated());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod navigation;
pub mod queries;
pub mod repository;
pub mod screens;
pub mod session;

#[cfg(feature = "async")]
pub use async_client::AsyncStorefrontSdk;
pub use client::ApiClient;
pub use error::{Result, StorefrontError};
pub use models::{Credentials, Product, ProductDraft, ProductField, ProductPatch, Rating};
pub use navigation::{Access, Screen};
pub use repository::{Authenticator, ProductRepository};
pub use screens::{CatalogScreen, ProductScreen};
pub use session::{FileSessionStore, MemorySessionStore, SessionGate, SessionStore};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Session storage owned by the SDK.
pub type BoxedSessionStore = Box<dyn SessionStore + Send>;

// ---------------------------------------------------------------------------
// StorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StorefrontSdk`] instance.
///
/// Use [`StorefrontSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StorefrontSdkBuilder::build) to create the SDK.
pub struct StorefrontSdkBuilder {
    base_url: String,
    timeout: Option<Duration>,
    session: Option<BoxedSessionStore>,
    session_file: Option<PathBuf>,
}

impl Default for StorefrontSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: None,
            session: None,
            session_file: None,
        }
    }
}

impl StorefrontSdkBuilder {
    /// Point the SDK at a different API host.
    ///
    /// Defaults to [`config::DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set a request timeout.
    ///
    /// If not set, the HTTP transport's default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Keep the session token in a JSON file at `path`.
    pub fn session_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.session_file = Some(path.as_ref().to_path_buf());
        self.session = None;
        self
    }

    /// Use a custom token store.
    pub fn session_store<S: SessionStore + Send + 'static>(mut self, store: S) -> Self {
        self.session = Some(Box::new(store));
        self.session_file = None;
        self
    }

    /// Keep the session token in memory only.
    pub fn in_memory_session(self) -> Self {
        self.session_store(MemorySessionStore::new())
    }

    /// Build the SDK.
    ///
    /// No request is made here; the HTTP client is created on first use.
    /// Without an explicit store, the token lives in
    /// [`config::default_session_path()`].
    pub fn build(self) -> StorefrontSdk {
        let store: BoxedSessionStore = match (self.session, self.session_file) {
            (Some(store), _) => store,
            (None, Some(path)) => Box::new(FileSessionStore::new(path)),
            (None, None) => Box::new(FileSessionStore::default_location()),
        };
        StorefrontSdk {
            client: ApiClient::new(&self.base_url, self.timeout),
            session: SessionGate::new(store),
        }
    }
}

// ---------------------------------------------------------------------------
// StorefrontSdk
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Owns the [`ApiClient`] and the [`SessionGate`], and exposes the API as
/// lightweight borrowing query wrappers.
///
/// Created via [`StorefrontSdk::builder()`].
pub struct StorefrontSdk {
    client: ApiClient,
    session: SessionGate<BoxedSessionStore>,
}

impl StorefrontSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StorefrontSdkBuilder {
        StorefrontSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the product query interface.
    pub fn products(&self) -> queries::ProductQuery<'_> {
        queries::ProductQuery::new(&self.client)
    }

    /// Access the login endpoint directly, without touching the session.
    pub fn auth(&self) -> queries::AuthQuery<'_> {
        queries::AuthQuery::new(&self.client)
    }

    // -- Session -----------------------------------------------------------

    pub fn session(&self) -> &SessionGate<BoxedSessionStore> {
        &self.session
    }

    /// Log in and store the token.
    pub fn login(&self, credentials: &Credentials) -> Result<String> {
        self.session.login(self, credentials)
    }

    /// Clear the stored token.
    pub fn logout(&self) -> Result<()> {
        self.session.logout()
    }

    /// Return a reference to the underlying [`ApiClient`].
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl ProductRepository for StorefrontSdk {
    fn fetch_all(&self) -> Result<Vec<Product>> {
        self.products().list()
    }

    fn fetch_one(&self, id: i64) -> Result<Product> {
        self.products().get(id)
    }

    fn create(&self, draft: &ProductDraft) -> Result<Product> {
        self.products().create(draft)
    }

    fn update(&self, id: i64, product: &Product) -> Result<Product> {
        self.products().update(id, product)
    }

    fn remove(&self, id: i64) -> Result<()> {
        self.products().delete(id)
    }
}

impl Authenticator for StorefrontSdk {
    fn login(&self, credentials: &Credentials) -> Result<String> {
        self.auth().login(credentials)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StorefrontSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StorefrontSdk(base_url={}, authenticated={})",
            self.client.base_url(),
            self.session.is_authenticated()
        )
    }
}
