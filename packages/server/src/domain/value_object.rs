//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use chrono::{DateTime, Local};

use super::error::ValueObjectError;

/// User name value object.
///
/// Identifies the author of a message. The only rule is that it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName.
    ///
    /// # Arguments
    ///
    /// * `name` - The user name string
    ///
    /// # Returns
    ///
    /// A Result containing the UserName or an error if the name is empty
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::UserNameEmpty);
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message body value object.
///
/// No length or emptiness constraint is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(body: String) -> Self {
        Self(body)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageBody {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp supplied by the client.
///
/// Opaque text: it is stored and echoed back, never parsed as a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTimestamp(String);

impl ClientTimestamp {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClientTimestamp {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Server-side acceptance time of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReceivedAt(DateTime<Local>);

impl ReceivedAt {
    pub fn new(value: DateTime<Local>) -> Self {
        Self(value)
    }

    /// Get the inner datetime value.
    pub fn value(&self) -> DateTime<Local> {
        self.0
    }

    /// ISO 8601 representation used on the wire.
    pub fn to_iso8601(&self) -> String {
        relay_shared::time::to_iso8601(&self.0)
    }
}

impl fmt::Display for ReceivedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso8601())
    }
}
