//! Scripted page source
//!
//! Replays queued results in order and records every cursor it was asked
//! for.

use crate::engine::PageFetcher;
use crate::error::{Error, Result};
use crate::pagination::{Cursor, PageResult};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// A fetcher that answers from a queue of prepared results
#[derive(Debug)]
pub struct ScriptedSource<T, C, E> {
    script: Mutex<VecDeque<Result<PageResult<T, C, E>>>>,
    requests: Mutex<Vec<Cursor<C>>>,
}

impl<T, C, E> Default for ScriptedSource<T, C, E> {
    fn default() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl<T, C, E> ScriptedSource<T, C, E> {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result
    #[must_use]
    pub fn then(self, result: PageResult<T, C, E>) -> Self {
        self.push(result);
        self
    }

    /// Queue a fetcher fault
    #[must_use]
    pub fn then_fault(self, message: impl Into<String>) -> Self {
        self.lock_script().push_back(Err(Error::fetcher(message)));
        self
    }

    /// Queue a result on a shared source
    pub fn push(&self, result: PageResult<T, C, E>) {
        self.lock_script().push_back(Ok(result));
    }

    /// Number of results not yet consumed
    pub fn remaining(&self) -> usize {
        self.lock_script().len()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<PageResult<T, C, E>>>> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, C: Clone, E> ScriptedSource<T, C, E> {
    /// Cursors requested so far, in call order
    pub fn requests(&self) -> Vec<Cursor<C>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl<T, C, E> PageFetcher<T, C, E> for ScriptedSource<T, C, E>
where
    T: Send + 'static,
    C: Send + 'static,
    E: Send + 'static,
{
    async fn fetch(&self, cursor: Cursor<C>) -> Result<PageResult<T, C, E>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(cursor);
        self.lock_script()
            .pop_front()
            .unwrap_or_else(|| Err(Error::fetcher("script exhausted")))
    }
}
