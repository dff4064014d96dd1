//! Shared access to one controller from event callbacks and spawned tasks.

use std::sync::Arc;

use newsglass_source::ContentSource;
use tokio::sync::Mutex;

use crate::controller::NavigationController;
use crate::gateway::{RenderGateway, SelectionEvent};
use crate::state::NavigationState;

/// Cloneable handle owning the controller behind an async mutex.
///
/// [`dispatch`](Self::dispatch) takes the lock with `try_lock`: a selection
/// arriving while a navigation holds the controller is dropped, never queued,
/// so stale clicks cannot pile up behind a slow fetch.
pub struct ReaderHandle<S, G> {
    inner: Arc<Mutex<NavigationController<S, G>>>,
}

impl<S, G> Clone for ReaderHandle<S, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, G> ReaderHandle<S, G>
where
    S: ContentSource,
    G: RenderGateway,
{
    pub fn new(controller: NavigationController<S, G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Run the initial page load. Waits for the lock; only called once at
    /// startup, before any events flow.
    pub async fn start(&self) {
        self.inner.lock().await.start().await;
    }

    /// Forward one selection event, dropping it if the controller is busy.
    pub async fn dispatch(&self, event: SelectionEvent) {
        match self.inner.try_lock() {
            Ok(mut controller) => controller.handle_selection(event).await,
            Err(_) => log::debug!("selection dropped: controller busy"),
        }
    }

    /// Snapshot of the current navigation state.
    pub async fn state(&self) -> NavigationState {
        self.inner.lock().await.state().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::Notify;

    use super::*;
    use crate::gateway::SelectionKind;
    use crate::state::View;
    use crate::test_support::{RecordingGateway, ScriptedSource, stories};

    fn reader(
        source: ScriptedSource,
    ) -> (
        ReaderHandle<Arc<ScriptedSource>, Arc<RecordingGateway>>,
        Arc<ScriptedSource>,
        Arc<RecordingGateway>,
    ) {
        let source = Arc::new(source);
        let gateway = Arc::new(RecordingGateway::default());
        let controller = NavigationController::new(Arc::clone(&source), Arc::clone(&gateway));
        (ReaderHandle::new(controller), source, gateway)
    }

    #[tokio::test]
    async fn dispatch_navigates_when_idle() {
        let (handle, source, _gateway) = reader(ScriptedSource::default().with_stories(stories(25)));
        handle.start().await;

        handle
            .dispatch(SelectionEvent {
                kind: SelectionKind::Click,
                index: 19,
            })
            .await;

        assert_eq!(source.front_page_calls(), 2);
        assert_eq!(handle.state().await.page, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn event_during_slow_fetch_is_dropped_not_queued() {
        let gate = Arc::new(Notify::new());
        let (handle, source, _gateway) = reader(
            ScriptedSource::default()
                .with_stories(stories(25))
                .gated(Arc::clone(&gate)),
        );

        let loader = {
            let handle = handle.clone();
            tokio::spawn(async move { handle.start().await })
        };
        while source.front_page_calls() == 0 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        // The load is parked inside the source; this click must vanish.
        handle
            .dispatch(SelectionEvent {
                kind: SelectionKind::Click,
                index: 19,
            })
            .await;

        gate.notify_one();
        loader.await.unwrap();

        assert_eq!(source.front_page_calls(), 1, "dropped event must not refetch");
        let state = handle.state().await;
        assert_eq!(state.page, 1);
        assert_eq!(state.view, View::List);
    }

    #[tokio::test]
    async fn clones_share_one_controller() {
        let (handle, _source, _gateway) = reader(ScriptedSource::default().with_stories(stories(3)));
        let observer = handle.clone();
        handle.start().await;
        assert_eq!(observer.state().await.stories.len(), 3);
    }
}
