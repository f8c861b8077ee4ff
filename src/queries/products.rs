//! Product reads and writes against the `/products` resource.

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::{ApiClient, TransportError};
use crate::config;
use crate::error::{Result, StorefrontError};
use crate::models::{Product, ProductDraft};

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface for the product catalog.
pub struct ProductQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the whole catalog in one request. No pagination.
    pub fn list(&self) -> Result<Vec<Product>> {
        let data = self
            .client
            .get_json(config::products_path())
            .map_err(|e| fetch_error("products", e))?;
        let products: Vec<Product> = serde_json::from_value(data).map_err(|e| {
            warn!(error = %e, "catalog body is not a product array");
            StorefrontError::Fetch("products".into())
        })?;
        debug!(count = products.len(), "fetched catalog");
        Ok(products)
    }

    /// Fetch a single product.
    ///
    /// The API answers an unknown id with an empty body instead of a 404, so
    /// a body that is empty, not an object, or has no `id` counts as not found.
    pub fn get(&self, id: i64) -> Result<Product> {
        let path = config::product_path(id);
        let data = self.client.get_json(&path).map_err(|e| fetch_error(&path, e))?;

        let has_id = data
            .as_object()
            .map(|obj| obj.get("id").is_some_and(|v| !v.is_null()))
            .unwrap_or(false);
        if !has_id {
            debug!(id, "product body missing id");
            return Err(StorefrontError::Fetch(format!("product {} not found", id)));
        }

        serde_json::from_value(data).map_err(|e| {
            warn!(id, error = %e, "product body did not decode");
            StorefrontError::Fetch(format!("product {} not found", id))
        })
    }

    /// POST a new product and return the server's echo.
    pub fn create(&self, draft: &ProductDraft) -> Result<Product> {
        let data = self
            .client
            .post_json(config::products_path(), draft)
            .map_err(|e| mutation_error("create product", e))?;
        decode_echo(data, "create product")
    }

    /// PUT the full product body to `/products/{id}` and return the server's echo.
    pub fn update(&self, id: i64, product: &Product) -> Result<Product> {
        let data = self
            .client
            .put_json(&config::product_path(id), product)
            .map_err(|e| mutation_error("update product", e))?;
        decode_echo(data, "update product")
    }

    /// DELETE `/products/{id}`.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&config::product_path(id))
            .map_err(|e| mutation_error("delete product", e))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fetch_error(what: &str, e: TransportError) -> StorefrontError {
    warn!(error = %e, "failed to load {}", what);
    StorefrontError::Fetch(what.to_string())
}

fn mutation_error(what: &str, e: TransportError) -> StorefrontError {
    warn!(error = %e, "failed to {}", what);
    StorefrontError::Mutation(what.to_string())
}

/// Decode a mutation echo. The body is trusted as-is, missing fields default.
fn decode_echo(data: Value, what: &str) -> Result<Product> {
    if !data.is_object() {
        warn!("{} returned a non-object body", what);
        return Err(StorefrontError::Mutation(what.to_string()));
    }
    serde_json::from_value(data).map_err(|e| {
        warn!(error = %e, "{} echo did not decode", what);
        StorefrontError::Mutation(what.to_string())
    })
}
