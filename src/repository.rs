//! Seams between screen state and the network.
//!
//! Screens and the session gate only see these traits. [`StorefrontSdk`]
//! implements them over HTTP; tests substitute in-memory fakes.
//!
//! [`StorefrontSdk`]: crate::StorefrontSdk

use crate::error::Result;
use crate::models::{Credentials, Product, ProductDraft};

/// Catalog reads and writes.
pub trait ProductRepository {
    /// Fetch the whole catalog.
    fn fetch_all(&self) -> Result<Vec<Product>>;

    /// Fetch one product by id.
    fn fetch_one(&self, id: i64) -> Result<Product>;

    /// Create a product; returns the server's echo.
    fn create(&self, draft: &ProductDraft) -> Result<Product>;

    /// Replace a product with `product`; returns the server's echo.
    fn update(&self, id: i64, product: &Product) -> Result<Product>;

    /// Delete a product.
    fn remove(&self, id: i64) -> Result<()>;
}

/// Exchanges credentials for a session token.
pub trait Authenticator {
    fn login(&self, credentials: &Credentials) -> Result<String>;
}
