//! Process-memory stores. All state is lost on restart.

mod color;
mod message;

pub use color::MemoizedColorAssigner;
pub use message::InMemoryMessageStore;
