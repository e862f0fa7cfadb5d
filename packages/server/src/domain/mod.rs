//! Domain layer for the relay.
//!
//! This module contains the message model, the color palette and the store
//! abstractions. It is independent of data transfer objects (DTOs) and of the
//! HTTP transport.

pub mod color;
pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use color::{Color, PALETTE};
pub use entity::{ColoredMessage, DEFAULT_HISTORY_WINDOW, Message, MessageDraft};
pub use error::ValueObjectError;
pub use repository::{ColorAssigner, MessageStore};
pub use value_object::{ClientTimestamp, MessageBody, ReceivedAt, UserName};
