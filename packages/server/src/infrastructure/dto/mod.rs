//! Data transfer objects exchanged with clients.

pub mod http;
