//! Tool dispatch port
//!
//! The async boundary between the protocol layer and tool execution.
//! Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

use super::entities::{ToolCall, ToolDefinition, ToolSpec};
use super::traits::ValidationError;
use super::value_objects::ToolOutcome;

/// A failure that aborts the call itself.
///
/// Everything a handler can get wrong — remote API errors, timeouts, I/O
/// failures — is contained in [`ToolOutcome::DomainFailure`] text. Only
/// these three cases surface to the caller as protocol errors.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The requested tool is not in the catalog.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's declared schema.
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] ValidationError),

    /// A fault the dispatcher could not attribute to the tool's domain.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Port for tool dispatch
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// The catalog of tools this executor can dispatch
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Dispatch one tool call.
    ///
    /// Every call resolves to exactly one [`ToolOutcome`] or exactly one
    /// [`DispatchError`]; handler failures never escape as errors.
    async fn execute(&self, call: &ToolCall) -> Result<ToolOutcome, DispatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedExecutor {
        spec: ToolSpec,
    }

    #[async_trait]
    impl ToolExecutorPort for FixedExecutor {
        fn tool_spec(&self) -> &ToolSpec {
            &self.spec
        }

        async fn execute(&self, call: &ToolCall) -> Result<ToolOutcome, DispatchError> {
            if self.has_tool(&call.tool_name) {
                Ok(ToolOutcome::success("ok"))
            } else {
                Err(DispatchError::UnknownTool(call.tool_name.clone()))
            }
        }
    }

    #[test]
    fn test_default_helpers() {
        let executor = FixedExecutor {
            spec: ToolSpec::new().register(ToolDefinition::new("claude", "test")),
        };

        assert!(executor.has_tool("claude"));
        assert!(!executor.has_tool("gpt6"));
        assert_eq!(executor.get_tool("claude").unwrap().name, "claude");
    }

    #[test]
    fn test_dispatch_error_display() {
        let error = DispatchError::UnknownTool("gpt6".to_string());
        assert_eq!(error.to_string(), "unknown tool: gpt6");
    }
}
