//! In-memory page source

use crate::engine::PageFetcher;
use crate::error::Result;
use crate::pagination::{Cursor, PageResult};
use async_trait::async_trait;

/// Pages through a list held in memory.
///
/// The cursor value is the offset of the next item to fetch; a first-page
/// cursor starts at 0.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource<T> {
    items: Vec<T>,
}

impl<T> InMemorySource<T> {
    /// Create a source over `items`
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Total number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the source has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl<T, E> PageFetcher<T, usize, E> for InMemorySource<T>
where
    T: Clone + Send + Sync + 'static,
    E: Send + 'static,
{
    async fn fetch(&self, cursor: Cursor<usize>) -> Result<PageResult<T, usize, E>> {
        let start = cursor.value().copied().unwrap_or(0).min(self.items.len());
        let end = start.saturating_add(cursor.limit()).min(self.items.len());
        let page = self.items[start..end].to_vec();
        let next = cursor.update_cursor(end);
        Ok(PageResult::success(page, next))
    }
}
