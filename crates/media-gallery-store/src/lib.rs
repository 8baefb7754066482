//! Client-side state for the media gallery
//!
//! Keeps the user's galleries, the images of each gallery and the pending
//! scratch upload in normalized, id-keyed maps, each entity carrying the
//! operation currently in flight on it and the last error it hit.
//!
//! # Data flow
//!
//! ```text
//! GalleryOperations ──dispatch──▶ Dispatcher ──▶ Store::process_pending
//!        │                                           │
//!        ▼                                           ▼
//!   Communicator                          Middleware ─▶ reduce ─▶ AppState
//!                                                                   │
//!                                                              selectors
//! ```
//!
//! Operations never touch state directly. They queue a request action, await
//! the server, then queue one terminal action. The reducers are pure, and
//! selectors answer `None` for anything unknown.

pub mod actions;
pub mod keyed_map;
pub mod middleware;
pub mod operations;
pub mod reducers;
pub mod selectors;
pub mod state;
mod store;

pub use actions::{Action, GalleryAction, ImageInfoAction, ImageScratchAction};
pub use keyed_map::{key_of, EntityKey, EntityState, KeyedMap, Transition};
pub use middleware::{Dispatcher, LoggingMiddleware, Middleware};
pub use operations::GalleryOperations;
pub use reducers::reduce;
pub use state::AppState;
pub use store::Store;
