//! Shared application state for axum handlers.

use std::sync::Arc;

use reflex_app::services::DeliveryHandler;

/// Application state shared across all axum handlers.
///
/// Generic over the delivery handler to avoid dynamic dispatch. `Clone` is
/// implemented manually so the handler itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<H> {
    /// The delivery coordinator behind the API.
    pub handler: Arc<H>,
}

impl<H> Clone for AppState<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<H: DeliveryHandler + 'static> AppState<H> {
    /// Create a new application state owning the handler.
    pub fn new(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Create a new application state from a pre-wrapped handler.
    ///
    /// Use this when the handler needs to be shared with other tasks before
    /// constructing the HTTP state.
    pub fn from_arc(handler: Arc<H>) -> Self {
        Self { handler }
    }
}
