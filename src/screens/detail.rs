//! Single-product state for the detail screen and the admin editor.

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Product, ProductPatch};
use crate::navigation::{Access, Screen};
use crate::repository::ProductRepository;
use crate::session::{SessionGate, SessionStore};

#[derive(Debug)]
pub struct ProductScreen {
    screen: Screen,
    id: i64,
    product: Option<Product>,
    patch: ProductPatch,
    error: Option<String>,
}

impl ProductScreen {
    /// Public, read-only detail of product `id`.
    pub fn details(id: i64) -> Self {
        Self::for_screen(Screen::ProductDetails(id), id)
    }

    /// Admin editor for product `id`.
    pub fn admin(id: i64) -> Self {
        Self::for_screen(Screen::ProductAdmin(id), id)
    }

    fn for_screen(screen: Screen, id: i64) -> Self {
        Self {
            screen,
            id,
            product: None,
            patch: ProductPatch::default(),
            error: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Run the session check and, if the screen may be shown, load the product.
    pub fn mount<S, R>(&mut self, gate: &SessionGate<S>, repo: &R) -> Result<Access>
    where
        S: SessionStore,
        R: ProductRepository + ?Sized,
    {
        let access = gate.enter(self.screen);
        if access == Access::Proceed {
            self.load(repo)?;
        }
        Ok(access)
    }

    /// Fetch the product. On failure the screen stays in its loading state.
    pub fn load<R: ProductRepository + ?Sized>(&mut self, repo: &R) -> Result<()> {
        match repo.fetch_one(self.id) {
            Ok(product) => {
                self.product = Some(product);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// `None` until a fetch succeeds.
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.product.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn patch(&self) -> &ProductPatch {
        &self.patch
    }

    pub fn patch_mut(&mut self) -> &mut ProductPatch {
        &mut self.patch
    }

    /// PUT the loaded product merged with the patch.
    ///
    /// Returns `Ok(None)` without a request when nothing is loaded or the patch
    /// is empty. On success the echo replaces the loaded product and the patch
    /// is cleared; on failure both are kept.
    pub fn update<R: ProductRepository + ?Sized>(&mut self, repo: &R) -> Result<Option<Product>> {
        let current = match &self.product {
            Some(p) if !self.patch.is_empty() => p,
            _ => {
                debug!(id = self.id, "update skipped: nothing loaded or empty patch");
                return Ok(None);
            }
        };
        let merged = self.patch.apply_to(current);
        let echoed = repo.update(self.id, &merged)?;
        info!(id = self.id, "product updated");
        self.product = Some(echoed.clone());
        self.patch.clear();
        Ok(Some(echoed))
    }
}
