//! Completion gateway port
//!
//! Defines the interface for one-shot text generation against a chat
//! model. The HTTP adapter lives in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the completion gateway.
///
/// The dispatcher embeds these in tool output text; they never abort a
/// call on their own.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The backend rejected the request; carries the message extracted
    /// from the response body when one was present.
    #[error("{0}")]
    Api(String),

    /// The request never completed: connect failure, timeout, bad transport.
    #[error("request failed: {0}")]
    RequestFailed(String),
}

/// Port for text generation
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send `message` to the model identified by `wire_model_id` and
    /// return the generated text.
    async fn complete(
        &self,
        wire_model_id: &str,
        message: &str,
        temperature: f64,
    ) -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_bare_message() {
        let error = CompletionError::Api("model overloaded".to_string());
        assert_eq!(error.to_string(), "model overloaded");
    }

    #[test]
    fn test_request_failed_display() {
        let error = CompletionError::RequestFailed("connection refused".to_string());
        assert_eq!(error.to_string(), "request failed: connection refused");
    }
}
