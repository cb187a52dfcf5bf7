//! Pagination state
//!
//! A state value is never mutated after construction. Every transition,
//! including the item mutations, builds a new value.

use crate::error::Result;
use crate::pagination::Cursor;
use serde::{Deserialize, Serialize};

/// What a paginated list currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaginationState<T, C, E> {
    /// Items are available
    Data {
        /// Items in display order
        items: Vec<T>,
        /// Cursor returned by the most recent fetch
        last_cursor: Cursor<C>,
        /// Whether no further page will yield new items
        is_last_page: bool,
    },
    /// A first-page fetch returned nothing
    Empty {
        /// Cursor returned by the most recent fetch
        last_cursor: Cursor<C>,
    },
    /// The most recent fetch failed
    Error {
        /// Cursor as of the failed attempt
        last_cursor: Cursor<C>,
        /// Optional consumer-defined error detail
        error: Option<E>,
        /// Items visible before the failure, kept only under
        /// [`ErrorPolicy::RetainItems`](crate::engine::ErrorPolicy::RetainItems)
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        retained: Vec<T>,
    },
}

impl<T, C, E> PaginationState<T, C, E> {
    /// State before any fetch: no items, positioned at the first page
    pub fn initial(first_page: Cursor<C>) -> Self {
        Self::Data {
            items: Vec::new(),
            last_cursor: first_page,
            is_last_page: false,
        }
    }

    /// Create a data state
    pub fn data(items: Vec<T>, last_cursor: Cursor<C>, is_last_page: bool) -> Self {
        Self::Data {
            items,
            last_cursor,
            is_last_page,
        }
    }

    /// Create an empty state
    pub fn empty(last_cursor: Cursor<C>) -> Self {
        Self::Empty { last_cursor }
    }

    /// Create an error state without retained items
    pub fn error(last_cursor: Cursor<C>, error: Option<E>) -> Self {
        Self::Error {
            last_cursor,
            error,
            retained: Vec::new(),
        }
    }

    /// Check if this is a data state
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }

    /// Check if this is an empty state
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Check if this is an error state
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Cursor of the most recent fetch, present in every variant
    pub fn last_cursor(&self) -> &Cursor<C> {
        match self {
            Self::Data { last_cursor, .. }
            | Self::Empty { last_cursor }
            | Self::Error { last_cursor, .. } => last_cursor,
        }
    }

    /// Items to display (retained items for an error state)
    pub fn items(&self) -> &[T] {
        match self {
            Self::Data { items, .. } => items,
            Self::Empty { .. } => &[],
            Self::Error { retained, .. } => retained,
        }
    }

    /// Last-page flag; only a data state can be at the end
    pub fn is_last_page(&self) -> bool {
        matches!(self, Self::Data { is_last_page: true, .. })
    }

    /// Whether a continuation fetch could still yield items
    pub fn can_load_more(&self) -> bool {
        matches!(self, Self::Data { is_last_page: false, .. })
    }

    /// Error detail of an error state
    pub fn error_detail(&self) -> Option<&E> {
        match self {
            Self::Error { error, .. } => error.as_ref(),
            _ => None,
        }
    }

    /// Items a continuation fetch merges with. Retained error items are
    /// display-only and never merged.
    pub(crate) fn prior_items(&self) -> &[T] {
        match self {
            Self::Data { items, .. } => items,
            _ => &[],
        }
    }

    /// Same state with a different pagination bookmark
    #[must_use]
    pub fn with_last_cursor(self, cursor: Cursor<C>) -> Self {
        match self {
            Self::Data {
                items,
                is_last_page,
                ..
            } => Self::Data {
                items,
                last_cursor: cursor,
                is_last_page,
            },
            Self::Empty { .. } => Self::Empty {
                last_cursor: cursor,
            },
            Self::Error {
                error, retained, ..
            } => Self::Error {
                last_cursor: cursor,
                error,
                retained,
            },
        }
    }
}

impl<T, C: Clone, E> PaginationState<T, C, E> {
    /// Cursor for a continuation fetch, `None` unless this is a data state
    pub fn next_cursor(&self) -> Option<Cursor<C>> {
        match self {
            Self::Data { last_cursor, .. } => Some(last_cursor.next(None)),
            _ => None,
        }
    }

    /// Cursor for re-fetching the current position, `None` unless this is a
    /// data state
    pub fn refreshing_cursor(&self) -> Option<Cursor<C>> {
        match self {
            Self::Data { last_cursor, .. } => Some(last_cursor.copy_with(None, None)),
            _ => None,
        }
    }
}

impl<T: Clone, C: Clone, E: Clone> PaginationState<T, C, E> {
    /// Replace the item at `index`. Empty and error states are returned
    /// unchanged.
    pub fn update_item_at(&self, index: usize, item: T) -> Result<Self> {
        let Self::Data {
            items,
            last_cursor,
            is_last_page,
        } = self
        else {
            return Ok(self.clone());
        };

        if index >= items.len() {
            return Err(crate::Error::index_out_of_range(index, items.len()));
        }
        let mut items = items.clone();
        items[index] = item;
        Ok(Self::data(items, last_cursor.clone(), *is_last_page))
    }

    /// Remove the item at `index`. Empty and error states are returned
    /// unchanged.
    pub fn remove_item_at(&self, index: usize) -> Result<Self> {
        let Self::Data {
            items,
            last_cursor,
            is_last_page,
        } = self
        else {
            return Ok(self.clone());
        };

        if index >= items.len() {
            return Err(crate::Error::index_out_of_range(index, items.len()));
        }
        let mut items = items.clone();
        items.remove(index);
        Ok(Self::data(items, last_cursor.clone(), *is_last_page))
    }
}
