//! Completion gateway adapter
//!
//! Translates completion requests into HTTP calls against an
//! OpenAI-compatible `/chat/completions` endpoint.

pub mod client;
pub mod protocol;

pub use client::HttpCompletionClient;
