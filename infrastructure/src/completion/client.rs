//! HTTP adapter for the completion port

use std::time::Duration;

use async_trait::async_trait;
use relay_domain::{CompletionError, CompletionPort};
use tracing::{debug, warn};

use super::protocol::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, WireMessage};
use crate::config::RelayConfig;

/// Upper bound on generated tokens per completion.
const MAX_COMPLETION_TOKENS: u32 = 4096;

/// Whole-request timeout for one outbound call. No retries are attempted.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Substituted when the backend reply carries no usable content.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response from model";

/// [`CompletionPort`] adapter for an OpenAI-compatible gateway.
pub struct HttpCompletionClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpCompletionClient {
    pub fn new(config: &RelayConfig) -> Self {
        Self::with_timeout(&config.api_base_url, &config.api_key, REQUEST_TIMEOUT)
    }

    /// Client with an explicit timeout; [`new`](Self::new) uses the
    /// standard 30 second bound.
    pub fn with_timeout(base_url: &str, api_key: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

#[async_trait]
impl CompletionPort for HttpCompletionClient {
    async fn complete(
        &self,
        wire_model_id: &str,
        message: &str,
        temperature: f64,
    ) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest {
            model: wire_model_id.to_string(),
            messages: vec![WireMessage::user(message)],
            temperature,
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        debug!(model = wire_model_id, "sending completion request");

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(model = wire_model_id, %status, "completion request rejected");
            return Err(CompletionError::Api(extract_api_error(status, &body)));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        let content = parsed
            .choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_RESPONSE_PLACEHOLDER);

        Ok(content.to_string())
    }
}

/// Prefer the gateway's own `error.message`; fall back to status plus body.
fn extract_api_error(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpCompletionClient {
        HttpCompletionClient::with_timeout(&server.uri(), "test-key", Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_complete_extracts_and_trims_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "claudeopus",
                "temperature": 0.7,
                "max_tokens": 4096,
                "messages": [{"role": "user", "content": "hi"}],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "  hello  "}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let text = client.complete("claudeopus", "hi", 0.7).await.unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_complete_missing_content_yields_placeholder() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let text = client.complete("gpt-5-chat", "hi", 0.7).await.unwrap();
        assert_eq!(text, NO_RESPONSE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_complete_empty_content_yields_placeholder() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "   "}}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let text = client.complete("gpt-5-chat", "hi", 0.7).await.unwrap();
        assert_eq!(text, NO_RESPONSE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_complete_surfaces_remote_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": {"message": "model overloaded"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.complete("glm-4.5", "hi", 0.7).await.unwrap_err();
        match error {
            CompletionError::Api(message) => assert_eq!(message, "model overloaded"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_non_json_error_body_falls_back_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.complete("kimi-k2", "hi", 0.7).await.unwrap_err();
        match error {
            CompletionError::Api(message) => {
                assert!(message.contains("503"));
                assert!(message.contains("bad gateway"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_timeout_is_request_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client =
            HttpCompletionClient::with_timeout(&server.uri(), "test-key", Duration::from_millis(50));
        let error = client.complete("gpt-4.1", "hi", 0.7).await.unwrap_err();
        assert!(matches!(error, CompletionError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_complete_connect_failure_is_request_failure() {
        // Nothing listens on port 1.
        let client = HttpCompletionClient::with_timeout(
            "http://127.0.0.1:1",
            "test-key",
            Duration::from_secs(1),
        );
        let error = client.complete("gpt-5-chat", "hi", 0.7).await.unwrap_err();
        assert!(matches!(error, CompletionError::RequestFailed(_)));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = HttpCompletionClient::with_timeout(
            "http://localhost:8080/v1/",
            "k",
            Duration::from_secs(1),
        );
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }
}
