//! Core domain models for the relay.

use super::{
    color::Color,
    value_object::{ClientTimestamp, MessageBody, ReceivedAt, UserName},
};

/// Default number of most recent messages served to polling clients
pub const DEFAULT_HISTORY_WINDOW: usize = 50;

/// A validated message that has not been accepted by a store yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub user: UserName,
    pub message: MessageBody,
    pub client_timestamp: ClientTimestamp,
}

impl MessageDraft {
    pub fn new(user: UserName, message: MessageBody, client_timestamp: ClientTimestamp) -> Self {
        Self {
            user,
            message,
            client_timestamp,
        }
    }
}

/// Represents one accepted chat message.
///
/// Only a store creates it, stamping `received_at` at insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Author of the message
    pub user: UserName,
    /// Message body
    pub message: MessageBody,
    /// Timestamp sent by the client, echoed back unchanged
    pub client_timestamp: ClientTimestamp,
    /// Time the server accepted the message
    pub received_at: ReceivedAt,
}

impl Message {
    /// Accept a draft at the given time
    pub fn accept(draft: MessageDraft, received_at: ReceivedAt) -> Self {
        Self {
            user: draft.user,
            message: draft.message,
            client_timestamp: draft.client_timestamp,
            received_at,
        }
    }
}

/// A message decorated with its author's color for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredMessage {
    pub message: Message,
    pub color: Color,
}
