//! State module
//!
//! The three-way pagination state a list view renders from.
//!
//! # Overview
//!
//! - `Data` - items, the last cursor and an end-of-data flag
//! - `Empty` - the first page came back with nothing
//! - `Error` - the last fetch failed

mod types;

pub use types::PaginationState;
