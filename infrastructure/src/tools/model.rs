//! Chat-model proxy tools, one per [`ModelTarget`]

use relay_domain::{
    CompletionPort, DEFAULT_TEMPERATURE, ModelTarget, ToolCall, ToolDefinition, ToolOutcome,
    ToolParameter,
};
use tracing::warn;

/// Build the definition for one model tool.
///
/// All model tools share this schema; only the names differ.
pub fn model_tool_definition(target: &ModelTarget) -> ToolDefinition {
    ToolDefinition::new(
        target.public_name,
        format!(
            "Send a message to the {} model through the configured gateway",
            target.display_name
        ),
    )
    .with_parameter(ToolParameter::new(
        "message",
        format!("Message to send to {}", target.display_name),
        true,
    ))
    .with_parameter(
        ToolParameter::new(
            "temperature",
            "Sampling temperature for generation (0.0-1.0)",
            false,
        )
        .with_type("number")
        .with_default(DEFAULT_TEMPERATURE),
    )
}

/// Run one model tool call against the completion gateway.
///
/// Gateway failures are contained: they come back as failure text naming
/// the model, never as an error the dispatcher would surface.
pub async fn execute_model_tool(
    gateway: &dyn CompletionPort,
    target: &ModelTarget,
    call: &ToolCall,
) -> ToolOutcome {
    let message = match call.require_string("message") {
        Ok(m) => m,
        Err(e) => return ToolOutcome::failure(e),
    };
    let temperature = call.get_f64("temperature").unwrap_or(DEFAULT_TEMPERATURE);

    match gateway
        .complete(target.wire_model_id, message, temperature)
        .await
    {
        Ok(text) => ToolOutcome::success(text),
        Err(e) => {
            warn!(model = target.public_name, error = %e, "completion failed");
            ToolOutcome::failure(format!("Error calling {}: {}", target.display_name, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use relay_domain::CompletionError;
    use std::sync::Mutex;

    /// Gateway double that records the request and replies with a canned result.
    struct RecordingGateway {
        reply: Result<String, CompletionError>,
        seen: Mutex<Option<(String, String, f64)>>,
    }

    impl RecordingGateway {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(None),
            }
        }

        fn failing(error: CompletionError) -> Self {
            Self {
                reply: Err(error),
                seen: Mutex::new(None),
            }
        }

        fn seen(&self) -> (String, String, f64) {
            self.seen.lock().unwrap().clone().unwrap()
        }
    }

    #[async_trait]
    impl CompletionPort for RecordingGateway {
        async fn complete(
            &self,
            wire_model_id: &str,
            message: &str,
            temperature: f64,
        ) -> Result<String, CompletionError> {
            *self.seen.lock().unwrap() =
                Some((wire_model_id.to_string(), message.to_string(), temperature));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(CompletionError::Api(m)) => Err(CompletionError::Api(m.clone())),
                Err(CompletionError::RequestFailed(m)) => {
                    Err(CompletionError::RequestFailed(m.clone()))
                }
            }
        }
    }

    fn claude() -> &'static ModelTarget {
        ModelTarget::find("claude").unwrap()
    }

    #[test]
    fn test_definition_binds_target_name() {
        let definition = model_tool_definition(claude());
        assert_eq!(definition.name, "claude");
        assert!(definition.description.contains("Claude Opus"));
        assert_eq!(definition.parameters[0].name, "message");
        assert!(definition.parameters[0].required);
        assert_eq!(
            definition.parameters[1].default,
            Some(serde_json::json!(DEFAULT_TEMPERATURE))
        );
    }

    #[tokio::test]
    async fn test_execute_forwards_wire_model_id() {
        let gateway = RecordingGateway::replying("hello");
        let call = ToolCall::new("claude")
            .with_arg("message", "hi")
            .with_arg("temperature", 0.2);

        let outcome = execute_model_tool(&gateway, claude(), &call).await;
        assert_eq!(outcome, ToolOutcome::success("hello"));
        assert_eq!(
            gateway.seen(),
            ("claudeopus".to_string(), "hi".to_string(), 0.2)
        );
    }

    #[tokio::test]
    async fn test_execute_defaults_temperature() {
        let gateway = RecordingGateway::replying("hello");
        let call = ToolCall::new("claude").with_arg("message", "hi");

        execute_model_tool(&gateway, claude(), &call).await;
        assert_eq!(gateway.seen().2, DEFAULT_TEMPERATURE);
    }

    #[tokio::test]
    async fn test_execute_contains_gateway_failure() {
        let gateway =
            RecordingGateway::failing(CompletionError::RequestFailed("timed out".to_string()));
        let call = ToolCall::new("claude").with_arg("message", "hi");

        let outcome = execute_model_tool(&gateway, claude(), &call).await;
        assert!(!outcome.is_success());
        assert!(outcome.text().contains("Claude Opus"));
        assert!(outcome.text().contains("timed out"));
    }

    #[tokio::test]
    async fn test_execute_embeds_remote_api_message() {
        let gateway =
            RecordingGateway::failing(CompletionError::Api("model overloaded".to_string()));
        let call = ToolCall::new("claude").with_arg("message", "hi");

        let outcome = execute_model_tool(&gateway, claude(), &call).await;
        assert_eq!(
            outcome,
            ToolOutcome::failure("Error calling Claude Opus: model overloaded")
        );
    }
}
