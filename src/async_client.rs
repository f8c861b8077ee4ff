//! Async wrapper around [`StorefrontSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while a
//! request is in flight.
//!
//! # Example
//!
//! ```no_run
//! use storefront_sdk::{AsyncStorefrontSdk, StorefrontSdk};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncStorefrontSdk::new(StorefrontSdk::builder().in_memory_session());
//!
//!     // Run any sync SDK method via closure
//!     let count = sdk.run(|s| Ok(s.products().list()?.len())).await.unwrap();
//!
//!     // Convenience method for the whole catalog
//!     let products = sdk.fetch_all().await.unwrap();
//!
//!     sdk.close().await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};

use crate::error::{Result, StorefrontError};
use crate::models::{Credentials, Product};
use crate::{StorefrontSdk, StorefrontSdkBuilder};

/// Async wrapper around [`StorefrontSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`StorefrontSdk`] is
/// protected by a [`Mutex`] since its session store may use `RefCell`
/// internally.
///
/// Call [`close()`](Self::close) before the runtime shuts down so the
/// blocking HTTP client is dropped off the async threads.
pub struct AsyncStorefrontSdk {
    inner: Arc<Mutex<StorefrontSdk>>,
}

impl AsyncStorefrontSdk {
    /// Build the SDK from a configured builder.
    ///
    /// Building makes no request, so this does not need the blocking pool.
    pub fn new(builder: StorefrontSdkBuilder) -> Self {
        Self {
            inner: Arc::new(Mutex::new(builder.build())),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&StorefrontSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StorefrontSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| StorefrontError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the whole catalog asynchronously.
    pub async fn fetch_all(&self) -> Result<Vec<Product>> {
        self.run(|s| s.products().list()).await
    }

    /// Fetch one product asynchronously.
    pub async fn fetch_one(&self, id: i64) -> Result<Product> {
        self.run(move |s| s.products().get(id)).await
    }

    /// Log in and store the token asynchronously.
    pub async fn login(&self, credentials: Credentials) -> Result<String> {
        self.run(move |s| s.login(&credentials)).await
    }

    /// Whether a session token is stored.
    pub async fn is_authenticated(&self) -> Result<bool> {
        self.run(|s| Ok(s.session().is_authenticated())).await
    }

    /// Close the SDK, dropping it on the blocking pool.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            drop(self.inner);
            Ok(())
        })
        .await
        .map_err(|e| StorefrontError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
