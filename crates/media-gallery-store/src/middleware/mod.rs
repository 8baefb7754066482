//! Middleware between action dispatch and the reducers
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! A middleware can inspect the action and the current state, queue further
//! actions through the [`Dispatcher`], or stop the action from reaching the
//! reducer by returning `false`.

use crate::{actions::Action, state::AppState};
use std::future::Future;
use std::pin::Pin;

mod dispatcher;
mod logging;

pub use dispatcher::Dispatcher;
pub use logging::LoggingMiddleware;

/// BoxFuture type alias for async middleware handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Handles actions before they reach the reducer
pub trait Middleware: Send + Sync {
    /// Returns `true` to pass the action on, `false` to consume it
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool>;
}
