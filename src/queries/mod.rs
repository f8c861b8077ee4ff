//! Query modules for the storefront SDK.
//!
//! Each module provides a query struct that borrows the SDK's
//! [`ApiClient`](crate::client::ApiClient) and exposes one method per API
//! operation, returning typed models.

pub mod auth;
pub mod products;

pub use auth::AuthQuery;
pub use products::ProductQuery;
