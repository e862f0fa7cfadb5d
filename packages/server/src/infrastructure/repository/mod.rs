//! Store implementations.
//!
//! Concrete implementations of the store traits defined by the domain layer.
//! Use cases depend on the traits, not on these types (dependency inversion).

pub mod inmemory;

pub use inmemory::{InMemoryMessageStore, MemoizedColorAssigner};
