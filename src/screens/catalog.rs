//! Catalog list state for the public and admin catalog screens.
//!
//! Holds the last fetched snapshot, the filter inputs and the create-form
//! draft. Mutations reconcile the snapshot from the server's echo without
//! re-fetching.
//!
//! Each fetch is tagged with a generation number. A response is applied only
//! if no newer fetch was issued after it, so a slow stale response cannot
//! overwrite a fresher one.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::filter::{unique_categories, FilterState};
use crate::models::{Product, ProductDraft};
use crate::navigation::{Access, Screen};
use crate::repository::ProductRepository;
use crate::session::{SessionGate, SessionStore};

/// Where a screen's fetch stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// The last fetch failed. The screen keeps showing its loading state.
    Failed(String),
}

/// Generation tag handed out by [`CatalogScreen::begin_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

// ---------------------------------------------------------------------------
// CatalogScreen
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct CatalogScreen {
    screen: Screen,
    products: Vec<Product>,
    filter: FilterState,
    draft: ProductDraft,
    state: LoadState,
    issued: u64,
}

impl CatalogScreen {
    /// The public catalog.
    pub fn public() -> Self {
        Self::for_screen(Screen::Main)
    }

    /// The admin catalog, with create and delete.
    pub fn admin() -> Self {
        Self::for_screen(Screen::MainAdmin)
    }

    fn for_screen(screen: Screen) -> Self {
        Self {
            screen,
            products: Vec::new(),
            filter: FilterState::new(),
            draft: ProductDraft::default(),
            state: LoadState::Loading,
            issued: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Run the session check and, if the screen may be shown, load the catalog.
    ///
    /// A redirect skips the fetch.
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

    /// Fetch the catalog and apply it.
    pub fn load<R: ProductRepository + ?Sized>(&mut self, repo: &R) -> Result<()> {
        let ticket = self.begin_fetch();
        self.finish_fetch(ticket, repo.fetch_all()).map(|_| ())
    }

    /// Issue a new fetch generation.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        debug!(generation = self.issued, "catalog fetch issued");
        FetchTicket(self.issued)
    }

    /// Apply the outcome of the fetch tagged `ticket`.
    ///
    /// Returns `Ok(false)` when a newer fetch has been issued since, in which
    /// case the outcome is discarded whether it succeeded or not. A failure of
    /// the latest fetch is recorded and returned; the snapshot is left as is.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Product>>) -> Result<bool> {
        if ticket.0 < self.issued {
            debug!(generation = ticket.0, latest = self.issued, "discarding stale catalog response");
            return Ok(false);
        }
        match result {
            Ok(products) => {
                debug!(generation = ticket.0, count = products.len(), "catalog applied");
                self.products = products;
                self.state = LoadState::Ready;
                Ok(true)
            }
            Err(e) => {
                warn!(generation = ticket.0, error = %e, "catalog fetch failed");
                self.state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state != LoadState::Ready
    }

    /// The failure message of the last fetch, if it failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The full snapshot, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    /// The snapshot narrowed by the current filter.
    pub fn visible(&self) -> Vec<&Product> {
        self.filter.apply(&self.products)
    }

    /// Category buttons, in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        unique_categories(&self.products)
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    /// Submit the draft. On success the echo is appended and the draft reset;
    /// on failure neither changes.
    pub fn create<R: ProductRepository + ?Sized>(&mut self, repo: &R) -> Result<Product> {
        let created = repo.create(&self.draft)?;
        info!(id = created.id, "product created");
        self.products.push(created.clone());
        self.draft.clear();
        Ok(created)
    }

    /// Delete `id` and drop every entry with that id from the snapshot.
    pub fn remove<R: ProductRepository + ?Sized>(&mut self, repo: &R, id: i64) -> Result<()> {
        repo.remove(id)?;
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        info!(id, removed = before - self.products.len(), "product deleted");
        Ok(())
    }
}
