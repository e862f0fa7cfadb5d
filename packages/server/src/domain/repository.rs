//! Store abstractions.
//!
//! The domain layer defines the traits; `infrastructure::repository` provides
//! the implementations. Use cases depend only on these traits.
//!
//! Both stores are synchronous: every operation completes under a short-lived
//! lock and never suspends.

use super::{
    color::Color,
    entity::{Message, MessageDraft},
    value_object::UserName,
};

/// Append-only message log with a bounded read window.
#[cfg_attr(test, mockall::automock)]
pub trait MessageStore: Send + Sync {
    /// Accept a draft, stamping its receive time, and append it to the log.
    ///
    /// Receive times are non-decreasing in append order.
    fn append(&self, draft: MessageDraft) -> Message;

    /// Snapshot of the last `limit` messages, oldest first.
    fn recent(&self, limit: usize) -> Vec<Message>;

    /// Number of messages in the whole log.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Memoized username to color mapping.
#[cfg_attr(test, mockall::automock)]
pub trait ColorAssigner: Send + Sync {
    /// Return the user's color, computing and remembering it on first sight.
    fn assign(&self, user: &UserName) -> Color;
}
