//! Engine types
//!
//! The fetcher seam and the policy for what a failure does to visible items.

use crate::error::Result;
use crate::pagination::{Cursor, PageResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Source of pages.
///
/// A fetcher returns `Ok(PageResult::Failure { .. })` for expected,
/// recoverable failures; those become an error state. Returning `Err` is a
/// fault and propagates to whoever triggered the fetch.
#[async_trait]
pub trait PageFetcher<T, C, E>: Send + Sync
where
    T: Send + 'static,
    C: Send + 'static,
    E: Send + 'static,
{
    /// Fetch the page at `cursor`. A successful result must carry the cursor
    /// the *next* page should be fetched from.
    async fn fetch(&self, cursor: Cursor<C>) -> Result<PageResult<T, C, E>>;
}

#[async_trait]
impl<T, C, E, F, Fut> PageFetcher<T, C, E> for F
where
    T: Send + 'static,
    C: Send + 'static,
    E: Send + 'static,
    F: Fn(Cursor<C>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PageResult<T, C, E>>> + Send + 'static,
{
    async fn fetch(&self, cursor: Cursor<C>) -> Result<PageResult<T, C, E>> {
        (self)(cursor).await
    }
}

/// What happens to the visible items when a fetch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// The error state carries no items
    #[default]
    DiscardItems,
    /// The error state keeps the previously visible items for display
    RetainItems,
}
