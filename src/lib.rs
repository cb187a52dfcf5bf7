//! # cursor-pager
//!
//! A generic cursor-pagination state manager for list views.
//!
//! Give it a function that fetches one page of items for an opaque cursor,
//! and it keeps the loaded items, the pagination cursor and a three-way state
//! (data / empty / error), with operations to load the first page, load the
//! next page, refresh, and edit individual items.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cursor_pager::{Cursor, PageResult, PaginationController, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fetcher = |cursor: Cursor<String>| async move {
//!         let items = api::list_after(cursor.value(), cursor.limit()).await?;
//!         let next = cursor.update_cursor(items.last().map(|i| i.id.clone()).unwrap_or_default());
//!         Ok(PageResult::<Item, String, ApiError>::success(items, next))
//!     };
//!
//!     let controller = PaginationController::new(Cursor::new(20)?, fetcher)
//!         .start()
//!         .await?;
//!
//!     let mut updates = controller.subscribe();
//!     controller.get_next().await?;
//!     render(&*updates.borrow_and_update());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  trigger (scroll proximity)     manual calls / start()       │
//! └───────────────────────────┬──────────────────────────────────┘
//!                             │
//! ┌───────────────────────────┴──────────────────────────────────┐
//! │ PaginationController   get_first · get_next · refresh        │
//! │                        update_item_at · remove_item_at       │
//! │                        OperationDepth (busy) · watch state   │
//! └───────────────────────────┬──────────────────────────────────┘
//!                             │
//! ┌───────────────────────────┴──────────────────────────────────┐
//! │ PaginationEngine   handle(cursor, state, replace)            │
//! │                    → PageFetcher → next_state                │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Cursors and page results
pub mod pagination;

/// Pagination state
pub mod state;

/// Fetch orchestration and state transitions
pub mod engine;

/// Public controller surface
pub mod controller;

/// Controller configuration
pub mod config;

/// Scroll-proximity trigger
pub mod trigger;

/// Built-in page sources
pub mod source;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ControllerConfig;
pub use controller::{PaginationController, StaleResponsePolicy};
pub use engine::{ErrorPolicy, PageFetcher, PaginationEngine};
pub use error::{Error, Result};
pub use pagination::{Cursor, PageResult};
pub use state::PaginationState;
pub use trigger::ScrollTrigger;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
