//! Completion backend abstraction and implementations

pub mod client;
pub mod openai;

pub use client::{CompletionBackend, RequestContext};
pub use openai::OpenAiChatClient;
