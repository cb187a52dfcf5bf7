//! Cursor and page result types
//!
//! `Cursor` is the immutable pagination pointer handed to a fetcher.
//! `PageResult` is what a fetcher hands back.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Opaque pagination pointer plus a page-size limit.
///
/// A cursor with no value always denotes the first page. Every derivation
/// returns a new cursor; nothing here mutates in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCursor<C>")]
pub struct Cursor<C> {
    value: Option<C>,
    limit: usize,
}

/// Unchecked wire form of a [`Cursor`]
#[derive(Deserialize)]
struct RawCursor<C> {
    value: Option<C>,
    limit: usize,
}

impl<C> TryFrom<RawCursor<C>> for Cursor<C> {
    type Error = Error;

    fn try_from(raw: RawCursor<C>) -> Result<Self> {
        Self::try_new(raw.value, raw.limit)
    }
}

impl<C> Cursor<C> {
    /// Create a first-page cursor with the given page limit
    pub fn new(limit: usize) -> Result<Self> {
        Self::try_new(None, limit)
    }

    /// Create a cursor at an explicit position
    pub fn try_new(value: Option<C>, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(Error::invalid_value("page_limit", "must be greater than 0"));
        }
        Ok(Self { value, limit })
    }

    /// The opaque cursor value, `None` for the first page
    pub fn value(&self) -> Option<&C> {
        self.value.as_ref()
    }

    /// Maximum number of items requested per page
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether this cursor points at the first page
    pub fn is_first_page(&self) -> bool {
        self.value.is_none()
    }

    /// Cursor for the first page, optionally with a different limit.
    ///
    /// A zero override is ignored.
    #[must_use]
    pub fn first(&self, limit: Option<usize>) -> Self {
        Self {
            value: None,
            limit: self.pick_limit(limit),
        }
    }

    /// Replace the cursor value, keeping the limit
    #[must_use]
    pub fn update_cursor(&self, value: C) -> Self {
        Self {
            value: Some(value),
            limit: self.limit,
        }
    }

    /// Number of items in a page tells whether it was the last one
    pub fn is_last_page(&self, item_count: usize) -> bool {
        item_count < self.limit
    }

    fn pick_limit(&self, limit: Option<usize>) -> usize {
        limit.filter(|l| *l > 0).unwrap_or(self.limit)
    }
}

impl<C: Clone> Cursor<C> {
    /// Cursor for the page after this one.
    ///
    /// The value is kept as is: the actual next position only arrives with a
    /// successful fetch, through [`Cursor::update_cursor`].
    #[must_use]
    pub fn next(&self, limit: Option<usize>) -> Self {
        if self.value.is_none() {
            return self.first(limit);
        }
        Self {
            value: self.value.clone(),
            limit: self.pick_limit(limit),
        }
    }

    /// Partial override; `None` keeps the current value or limit
    #[must_use]
    pub fn copy_with(&self, value: Option<C>, limit: Option<usize>) -> Self {
        Self {
            value: value.or_else(|| self.value.clone()),
            limit: self.pick_limit(limit),
        }
    }
}

/// Outcome of one fetch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult<T, C, E> {
    /// Items were fetched
    Success {
        /// Items of this page, in display order
        items: Vec<T>,
        /// Position the next page should be fetched from
        cursor: Cursor<C>,
        /// Whether this was the final page
        is_last_page: bool,
    },
    /// The fetch failed in an expected, recoverable way
    Failure {
        /// Cursor as of the failed attempt, for retry
        cursor: Cursor<C>,
        /// Optional consumer-defined error detail
        error: Option<E>,
    },
}

impl<T, C, E> PageResult<T, C, E> {
    /// Create a success, deriving the last-page flag from the item count
    pub fn success(items: Vec<T>, cursor: Cursor<C>) -> Self {
        let is_last_page = cursor.is_last_page(items.len());
        Self::Success {
            items,
            cursor,
            is_last_page,
        }
    }

    /// Create a success with an explicit last-page flag
    pub fn success_with_last_page(items: Vec<T>, cursor: Cursor<C>, is_last_page: bool) -> Self {
        Self::Success {
            items,
            cursor,
            is_last_page,
        }
    }

    /// Create a failure carrying an error detail
    pub fn failure(cursor: Cursor<C>, error: E) -> Self {
        Self::Failure {
            cursor,
            error: Some(error),
        }
    }

    /// Create a failure with no error detail
    pub fn failure_without_error(cursor: Cursor<C>) -> Self {
        Self::Failure {
            cursor,
            error: None,
        }
    }

    /// Check if this is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Check if this is a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Cursor carried by either variant
    pub fn cursor(&self) -> &Cursor<C> {
        match self {
            Self::Success { cursor, .. } | Self::Failure { cursor, .. } => cursor,
        }
    }
}
