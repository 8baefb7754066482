use crate::{
    actions::Action,
    middleware::{Dispatcher, Middleware},
    reducers::reduce,
    state::AppState,
};
use tokio::sync::mpsc;

/// Redux-style Store that holds the gallery state and applies actions
///
/// - `dispatch` goes straight to the reducer
/// - `dispatch_async` runs the middleware chain first
/// - `process_pending` drains actions queued through a [`Dispatcher`]
///
/// ```rust,ignore
/// let (dispatcher, mut rx) = Dispatcher::channel();
/// let mut store = Store::default();
/// store.add_middleware(LoggingMiddleware::new());
///
/// operations.get_image_galleries(&dispatcher, "atoken").await;
/// store.process_pending(&mut rx, &dispatcher).await;
/// ```
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action through the middleware chain, then the reducer
    pub async fn dispatch_async(&mut self, action: Action, dispatcher: &Dispatcher) {
        let mut should_continue = true;
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, dispatcher).await {
                should_continue = false;
                break;
            }
        }

        if should_continue {
            self.dispatch(action);
        }
    }

    /// Apply an action to the reducer, bypassing middleware
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &action);
    }

    /// Apply every action currently queued on `rx`
    ///
    /// Actions queued by middleware while draining are applied in the same
    /// call. Returns the number of actions processed.
    pub async fn process_pending(
        &mut self,
        rx: &mut mpsc::UnboundedReceiver<Action>,
        dispatcher: &Dispatcher,
    ) -> usize {
        let mut processed = 0;
        while let Ok(action) = rx.try_recv() {
            self.dispatch_async(action, dispatcher).await;
            processed += 1;
        }
        processed
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GalleryAction;
    use crate::middleware::{BoxFuture, LoggingMiddleware};
    use crate::state::CollectionOperation;
    use media_gallery_client::{Gallery, GalleryId};
    use pretty_assertions::assert_eq;

    /// Consumes every gallery list request
    struct BlockListRequests;

    impl Middleware for BlockListRequests {
        fn handle<'a>(
            &'a mut self,
            action: &'a Action,
            _state: &'a AppState,
            _dispatcher: &'a Dispatcher,
        ) -> BoxFuture<'a, bool> {
            Box::pin(async move { !matches!(action, Action::Gallery(GalleryAction::ListRequest)) })
        }
    }

    /// Answers every gallery list request with an empty list
    struct AnswerListRequests;

    impl Middleware for AnswerListRequests {
        fn handle<'a>(
            &'a mut self,
            action: &'a Action,
            _state: &'a AppState,
            dispatcher: &'a Dispatcher,
        ) -> BoxFuture<'a, bool> {
            Box::pin(async move {
                if matches!(action, Action::Gallery(GalleryAction::ListRequest)) {
                    dispatcher.dispatch(GalleryAction::ListResponseOk(vec![Gallery::new(1, "a")]));
                }
                true
            })
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::default();
        store.dispatch(GalleryAction::ListRequest.into());
        assert_eq!(
            store.state().galleries.processing,
            Some(CollectionOperation::Fetch)
        );

        store.dispatch(GalleryAction::ListResponseOk(vec![Gallery::new(5, "a")]).into());
        assert_eq!(store.state().galleries.processing, None);
        assert!(store.state().galleries.galleries.contains(GalleryId(5)));
    }

    #[tokio::test]
    async fn test_middleware_can_block_action() {
        let (dispatcher, _rx) = Dispatcher::channel();
        let mut store = Store::default();
        store.add_middleware(LoggingMiddleware::new());
        store.add_middleware(BlockListRequests);

        store
            .dispatch_async(GalleryAction::ListRequest.into(), &dispatcher)
            .await;
        assert_eq!(store.state(), &AppState::default());
    }

    #[tokio::test]
    async fn test_process_pending_drains_follow_up_actions() {
        let (dispatcher, mut rx) = Dispatcher::channel();
        let mut store = Store::default();
        store.add_middleware(AnswerListRequests);

        dispatcher.dispatch(GalleryAction::ListRequest);
        let processed = store.process_pending(&mut rx, &dispatcher).await;

        assert_eq!(processed, 2);
        assert_eq!(store.state().galleries.processing, None);
        assert!(store.state().galleries.galleries.contains(GalleryId(1)));
    }
}
