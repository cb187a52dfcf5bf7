//! Pagination module
//!
//! Cursor pointers and per-fetch page results.
//!
//! # Overview
//!
//! A fetcher receives a [`Cursor`] and answers with a [`PageResult`]. The
//! cursor value is opaque to this crate; only its presence matters (absent
//! means "first page") together with the page limit used for last-page
//! detection.

mod types;

pub use types::{Cursor, PageResult};
