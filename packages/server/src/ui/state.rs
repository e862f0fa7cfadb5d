//! Server state shared by every request handler.

use std::sync::Arc;

use crate::{
    domain::{ColorAssigner, MessageStore},
    infrastructure::repository::{InMemoryMessageStore, MemoizedColorAssigner},
};

/// Shared application state
///
/// Constructed once at startup and handed to every handler.
pub struct AppState {
    /// Message log
    pub messages: Arc<dyn MessageStore>,
    /// Username to color mapping
    pub colors: Arc<dyn ColorAssigner>,
    /// Number of messages served by `GET /messages`
    pub history_window: usize,
}

impl AppState {
    /// State backed by fresh in-memory stores
    pub fn in_memory(history_window: usize) -> Self {
        Self::new(
            Arc::new(InMemoryMessageStore::new()),
            Arc::new(MemoizedColorAssigner::new()),
            history_window,
        )
    }

    pub fn new(
        messages: Arc<dyn MessageStore>,
        colors: Arc<dyn ColorAssigner>,
        history_window: usize,
    ) -> Self {
        Self {
            messages,
            colors,
            history_window,
        }
    }
}
