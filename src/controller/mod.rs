//! Controller module
//!
//! The public surface a list view talks to.
//!
//! # Overview
//!
//! The controller module provides:
//! - `PaginationController` - Holds the current state and runs operations
//! - `OperationDepth` - Busy signal over operations in flight
//! - `StaleResponsePolicy` - Opt-in sequencing of overlapping fetches
//!
//! Overlapping operations are not queued. With the default
//! [`StaleResponsePolicy::Apply`], whichever fetch completes last decides
//! the state.

mod depth;
mod types;

pub use depth::{DepthGuard, OperationDepth};
pub use types::StaleResponsePolicy;

use crate::config::ControllerConfig;
use crate::engine::{PageFetcher, PaginationEngine};
use crate::error::Result;
use crate::pagination::Cursor;
use crate::state::PaginationState;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, warn};
use types::Operation;

/// Owns the current pagination state of one list
#[derive(Debug)]
pub struct PaginationController<T, C, E, F> {
    /// Fetch orchestration
    engine: PaginationEngine<F>,
    /// Cursor used for first-page fetches and as the fallback position
    first_page: Cursor<C>,
    /// Controller settings
    config: ControllerConfig,
    /// Current state slot, observable by subscribers
    state: watch::Sender<PaginationState<T, C, E>>,
    /// Operations in flight
    depth: OperationDepth,
    /// Tickets of issued fetch operations
    sequence: AtomicU64,
}

impl<T, C, E, F> PaginationController<T, C, E, F>
where
    T: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    F: PageFetcher<T, C, E>,
{
    /// Create an idle controller positioned at `first_page`.
    ///
    /// Nothing is fetched until [`start`](Self::start) or an operation is
    /// called.
    pub fn new(first_page: Cursor<C>, fetcher: F) -> Self {
        let config = ControllerConfig::default();
        let (state, _) = watch::channel(PaginationState::initial(first_page.clone()));
        Self {
            engine: PaginationEngine::new(fetcher).with_error_policy(config.error_policy),
            first_page,
            config,
            state,
            depth: OperationDepth::new(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Create a controller whose first-page cursor uses the configured page
    /// limit
    pub fn from_config(config: ControllerConfig, fetcher: F) -> Result<Self> {
        config.validate()?;
        let first_page = Cursor::new(config.page_limit)?;
        Ok(Self::new(first_page, fetcher).with_config(config))
    }

    /// Set controller configuration
    #[must_use]
    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.engine = self.engine.with_error_policy(config.error_policy);
        self.config = config;
        self
    }

    /// Replace the initial state
    #[must_use]
    pub fn with_initial_state(self, state: PaginationState<T, C, E>) -> Self {
        self.state.send_replace(state);
        self
    }

    /// Load the first page if configured to, then hand the controller back
    pub async fn start(self) -> Result<Self> {
        if self.config.load_first_page_on_init {
            self.get_first().await?;
        }
        Ok(self)
    }

    /// Get the configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Get the first-page cursor
    pub fn first_page(&self) -> &Cursor<C> {
        &self.first_page
    }

    /// Get the fetcher
    pub fn fetcher(&self) -> &F {
        self.engine.fetcher()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> PaginationState<T, C, E> {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<PaginationState<T, C, E>> {
        self.state.subscribe()
    }

    /// Whether any operation is in flight
    pub fn is_busy(&self) -> bool {
        self.depth.is_busy()
    }

    /// Number of operations in flight
    pub fn depth(&self) -> usize {
        self.depth.depth()
    }

    /// Subscribe to busy flag changes
    pub fn subscribe_busy(&self) -> watch::Receiver<bool> {
        self.depth.subscribe()
    }

    /// Fetch the first page, replacing all items
    pub async fn get_first(&self) -> Result<PaginationState<T, C, E>> {
        self.run(Operation::First).await
    }

    /// Fetch the page after the current one and append it. Falls back to the
    /// first page when the current state has no next cursor.
    pub async fn get_next(&self) -> Result<PaginationState<T, C, E>> {
        self.run(Operation::Next).await
    }

    /// Re-fetch at the current position, replacing the items but keeping
    /// the current pagination bookmark
    pub async fn refresh_current(&self) -> Result<PaginationState<T, C, E>> {
        self.run(Operation::Refresh).await
    }

    /// Replace the item at `index`; no-op unless the state holds data
    pub fn update_item_at(&self, index: usize, item: T) -> Result<PaginationState<T, C, E>> {
        let _guard = self.depth.enter();
        let next = self.state.borrow().update_item_at(index, item)?;
        self.state.send_replace(next.clone());
        Ok(next)
    }

    /// Remove the item at `index`; no-op unless the state holds data
    pub fn remove_item_at(&self, index: usize) -> Result<PaginationState<T, C, E>> {
        let _guard = self.depth.enter();
        let next = self.state.borrow().remove_item_at(index)?;
        self.state.send_replace(next.clone());
        Ok(next)
    }

    async fn run(&self, operation: Operation) -> Result<PaginationState<T, C, E>> {
        let _guard = self.depth.enter();
        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let current = self.state();

        let (request, replace) = match operation {
            Operation::First => (self.first_page.clone(), true),
            Operation::Next => (
                current
                    .next_cursor()
                    .unwrap_or_else(|| self.first_page.clone()),
                false,
            ),
            Operation::Refresh => (
                current
                    .refreshing_cursor()
                    .unwrap_or_else(|| self.first_page.clone()),
                true,
            ),
        };
        debug!("Running {operation} (ticket {ticket})");

        let mut next = self.engine.handle(request, &current, replace).await?;
        if operation == Operation::Refresh {
            next = next.with_last_cursor(current.last_cursor().clone());
        }

        if self.config.stale_responses == StaleResponsePolicy::Discard
            && self.sequence.load(Ordering::SeqCst) != ticket
        {
            warn!("Discarding stale {operation} response (ticket {ticket})");
            return Ok(self.state());
        }

        self.state.send_replace(next.clone());
        Ok(next)
    }
}
