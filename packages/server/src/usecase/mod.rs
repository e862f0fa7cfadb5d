//! UseCase 層
//!
//! UI 層から呼び出され、Domain 層のストアを組み合わせます。

pub mod fetch_messages;
pub mod submit_message;

pub use fetch_messages::FetchMessagesUseCase;
pub use submit_message::SubmitMessageUseCase;
