//! Built-in page sources
//!
//! Ready-made [`PageFetcher`](crate::engine::PageFetcher) implementations:
//! - `InMemorySource` - Pages through a list held in memory, offset cursors
//! - `ScriptedSource` - Replays a fixed sequence of results, for tests and demos

mod memory;
mod scripted;

pub use memory::InMemorySource;
pub use scripted::ScriptedSource;

#[cfg(test)]
mod tests;
