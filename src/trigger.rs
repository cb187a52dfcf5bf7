//! Scroll-proximity continuation trigger
//!
//! Turns scroll position updates into `get_next` calls when the viewer gets
//! close to the end of the rendered content. Positions and extents are in
//! whatever unit the rendering layer uses.

use crate::controller::PaginationController;
use crate::engine::PageFetcher;
use crate::error::Result;
use crate::state::PaginationState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::trace;

/// Default distance from the end at which the next page is requested
pub const DEFAULT_THRESHOLD: f64 = 200.0;

/// Requests the next page when scrolling toward the end of a list
#[derive(Debug)]
pub struct ScrollTrigger {
    threshold: f64,
    last_position: Mutex<f64>,
    loading: AtomicBool,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl ScrollTrigger {
    /// Create a trigger firing within `threshold` of the end
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_position: Mutex::new(0.0),
            loading: AtomicBool::new(false),
        }
    }

    /// Distance from the end that fires the trigger
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a load started by this trigger is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Record a scroll position and decide whether it should load more.
    ///
    /// True only when the position moved toward the end, is within the
    /// threshold of `max_extent`, and `state` can still load more.
    pub fn should_load<T, C, E>(
        &self,
        position: f64,
        max_extent: f64,
        state: &PaginationState<T, C, E>,
    ) -> bool {
        let previous = {
            let mut last = self
                .last_position
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *last, position)
        };

        let toward_end = position > previous;
        let near_end = max_extent - position <= self.threshold;
        let decision = toward_end && near_end && state.can_load_more();
        trace!("Scroll at {position}/{max_extent}: toward_end={toward_end}, near_end={near_end}, load={decision}");
        decision
    }

    /// Feed a scroll position; calls `get_next` on the controller when
    /// [`should_load`](Self::should_load) says so and no load from this
    /// trigger is already running.
    ///
    /// Returns the new state, or `None` when nothing was requested.
    pub async fn on_scroll<T, C, E, F>(
        &self,
        position: f64,
        max_extent: f64,
        controller: &PaginationController<T, C, E, F>,
    ) -> Result<Option<PaginationState<T, C, E>>>
    where
        T: Clone + Send + Sync + 'static,
        C: Clone + Send + Sync + 'static,
        E: Clone + Send + Sync + 'static,
        F: PageFetcher<T, C, E>,
    {
        if !self.should_load(position, max_extent, &controller.state()) {
            return Ok(None);
        }
        if self.loading.swap(true, Ordering::SeqCst) {
            trace!("Load already in flight, ignoring scroll");
            return Ok(None);
        }

        let _loading = LoadingGuard(&self.loading);
        controller.get_next().await.map(Some)
    }
}

/// Clears the loading flag on every exit path
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerConfig;
    use crate::pagination::{Cursor, PageResult};
    use crate::source::{InMemorySource, ScriptedSource};

    type State = PaginationState<u32, usize, ()>;

    fn data(is_last_page: bool) -> State {
        PaginationState::data(vec![1, 2], Cursor::try_new(Some(2), 2).unwrap(), is_last_page)
    }

    #[test]
    fn test_default_threshold() {
        let trigger = ScrollTrigger::default();
        assert!((trigger.threshold() - 200.0).abs() < f64::EPSILON);
        assert!(!trigger.is_loading());
    }

    #[test]
    fn test_should_load_near_end_scrolling_forward() {
        let trigger = ScrollTrigger::default();
        assert!(!trigger.should_load(100.0, 1000.0, &data(false)));
        assert!(trigger.should_load(850.0, 1000.0, &data(false)));
    }

    #[test]
    fn test_should_not_load_scrolling_backward() {
        let trigger = ScrollTrigger::default();
        assert!(trigger.should_load(900.0, 1000.0, &data(false)));
        assert!(!trigger.should_load(880.0, 1000.0, &data(false)));
    }

    #[test]
    fn test_should_not_load_at_end_of_data_or_other_states() {
        let trigger = ScrollTrigger::default();
        assert!(!trigger.should_load(900.0, 1000.0, &data(true)));

        let empty: State = PaginationState::empty(Cursor::new(2).unwrap());
        assert!(!trigger.should_load(950.0, 1000.0, &empty));

        let error: State = PaginationState::error(Cursor::new(2).unwrap(), None);
        assert!(!trigger.should_load(990.0, 1000.0, &error));
    }

    #[tokio::test]
    async fn test_on_scroll_loads_next_page() {
        let config = ControllerConfig::new().with_page_limit(2);
        let controller: PaginationController<u32, usize, (), _> =
            PaginationController::from_config(config, InMemorySource::new(vec![1, 2, 3]))
                .unwrap()
                .start()
                .await
                .unwrap();
        let trigger = ScrollTrigger::new(50.0);

        assert!(trigger.on_scroll(10.0, 100.0, &controller).await.unwrap().is_none());

        let state = trigger.on_scroll(60.0, 100.0, &controller).await.unwrap().unwrap();
        assert_eq!(state.items(), &[1, 2, 3]);
        assert!(state.is_last_page());
        assert!(!trigger.is_loading());

        // end of data: further scrolling does nothing
        assert!(trigger.on_scroll(90.0, 100.0, &controller).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_on_scroll_clears_loading_flag_on_fault() {
        let source: ScriptedSource<u32, usize, ()> = ScriptedSource::new().then_fault("offline");
        let controller = PaginationController::new(Cursor::new(2).unwrap(), source)
            .with_initial_state(data(false));
        let trigger = ScrollTrigger::default();

        let err = trigger.on_scroll(900.0, 1000.0, &controller).await;
        assert!(err.is_err());
        assert!(!trigger.is_loading());
    }

    #[tokio::test]
    async fn test_on_scroll_ignores_reentrant_calls() {
        let source: ScriptedSource<u32, usize, ()> = ScriptedSource::new()
            .then(PageResult::success(vec![3, 4], Cursor::try_new(Some(4), 2).unwrap()));
        let controller = PaginationController::new(Cursor::new(2).unwrap(), source)
            .with_initial_state(data(false));
        let trigger = ScrollTrigger::default();

        trigger.loading.store(true, Ordering::SeqCst);
        assert!(trigger.on_scroll(900.0, 1000.0, &controller).await.unwrap().is_none());
        assert_eq!(controller.fetcher().remaining(), 1);

        trigger.loading.store(false, Ordering::SeqCst);
        let state = trigger.on_scroll(950.0, 1000.0, &controller).await.unwrap().unwrap();
        assert_eq!(state.items(), &[1, 2, 3, 4]);
    }
}
