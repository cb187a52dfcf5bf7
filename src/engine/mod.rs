//! Pagination engine module
//!
//! Runs one fetch cycle and computes the next state.
//!
//! # Overview
//!
//! The engine module provides:
//! - `PageFetcher` - The external page source
//! - `PaginationEngine` - Calls the fetcher and applies the result
//! - `next_state` - The pure transition function behind `handle`
//!
//! # Transitions
//!
//! | From \ Result  | items > 0       | items = 0, first page | items = 0, continuation       | failure |
//! |----------------|-----------------|-----------------------|-------------------------------|---------|
//! | Data           | merged/replaced | Empty                 | same items, last page         | Error   |
//! | Empty / Error  | replaced        | Empty                 | no items, last page           | Error   |

mod types;

pub use types::{ErrorPolicy, PageFetcher};

use crate::error::Result;
use crate::pagination::{Cursor, PageResult};
use crate::state::PaginationState;
use tracing::{debug, warn};

/// Orchestrates a single fetch cycle against a fetcher
#[derive(Debug, Clone)]
pub struct PaginationEngine<F> {
    /// Page source
    fetcher: F,
    /// What a failure does to visible items
    error_policy: ErrorPolicy,
}

impl<F> PaginationEngine<F> {
    /// Create a new engine around a fetcher
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            error_policy: ErrorPolicy::default(),
        }
    }

    /// Set the error policy
    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Get the fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Get the error policy
    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Fetch the page at `request` and compute the state that follows
    /// `current`.
    ///
    /// `replace` discards the current items instead of appending to them.
    /// Faults returned by the fetcher are not caught.
    pub async fn handle<T, C, E>(
        &self,
        request: Cursor<C>,
        current: &PaginationState<T, C, E>,
        replace: bool,
    ) -> Result<PaginationState<T, C, E>>
    where
        F: PageFetcher<T, C, E>,
        T: Clone + Send + 'static,
        C: Send + 'static,
        E: Send + 'static,
    {
        let first_page = request.is_first_page();
        debug!(
            "Fetching page (first_page: {first_page}, limit: {}, replace: {replace})",
            request.limit()
        );

        let result = self.fetcher.fetch(request).await?;
        Ok(next_state(
            first_page,
            current,
            replace,
            result,
            self.error_policy,
        ))
    }
}

/// Pure state transition for one fetch result.
///
/// `first_page` tells whether the *requested* cursor was a first-page
/// cursor; it alone decides between `Empty` and end-of-data on an empty
/// page.
pub fn next_state<T: Clone, C, E>(
    first_page: bool,
    current: &PaginationState<T, C, E>,
    replace: bool,
    result: PageResult<T, C, E>,
    error_policy: ErrorPolicy,
) -> PaginationState<T, C, E> {
    match result {
        PageResult::Success {
            items,
            cursor,
            is_last_page,
        } => {
            if items.is_empty() {
                if first_page {
                    debug!("First page is empty");
                    return PaginationState::empty(cursor);
                }
                debug!("Continuation page is empty, end of data");
                return PaginationState::data(current.prior_items().to_vec(), cursor, true);
            }

            debug!("Fetched {} items (last_page: {is_last_page})", items.len());
            let items = if replace {
                items
            } else {
                let mut merged = current.prior_items().to_vec();
                merged.extend(items);
                merged
            };
            PaginationState::data(items, cursor, is_last_page)
        }
        PageResult::Failure { cursor, error } => {
            warn!("Page fetch failed, entering error state");
            let retained = match error_policy {
                ErrorPolicy::DiscardItems => Vec::new(),
                ErrorPolicy::RetainItems => current.items().to_vec(),
            };
            PaginationState::Error {
                last_cursor: cursor,
                error,
                retained,
            }
        }
    }
}
