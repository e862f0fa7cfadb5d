//! HTTP transport for the relay.

mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{router, run, serve};
