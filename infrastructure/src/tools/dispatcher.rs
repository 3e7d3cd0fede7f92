//! Local tool dispatcher — the concrete [`ToolExecutorPort`]
//!
//! The pivot of the server: look the tool up in the catalog, validate the
//! arguments, route to the matching handler, and hand the outcome back for
//! envelope wrapping. Only an unknown tool name, invalid arguments, or a
//! catalog/handler mismatch abort the call; everything a handler can fail
//! at is embedded in its outcome text.

use std::sync::Arc;

use async_trait::async_trait;
use relay_domain::{
    CompletionPort, DefaultToolValidator, DispatchError, ModelTarget, ToolCall, ToolExecutorPort,
    ToolOutcome, ToolSpec, ToolValidator,
};
use tracing::debug;

use super::{fs, model};

/// Dispatcher over the default catalog, backed by a completion gateway.
pub struct LocalToolDispatcher {
    tool_spec: ToolSpec,
    gateway: Arc<dyn CompletionPort>,
}

impl LocalToolDispatcher {
    /// Dispatcher over the full default catalog.
    pub fn new(gateway: Arc<dyn CompletionPort>) -> Self {
        Self {
            tool_spec: super::default_tool_spec(),
            gateway,
        }
    }

    /// Dispatcher over a custom catalog.
    pub fn with_tools(gateway: Arc<dyn CompletionPort>, tool_spec: ToolSpec) -> Self {
        Self { tool_spec, gateway }
    }
}

#[async_trait]
impl ToolExecutorPort for LocalToolDispatcher {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolOutcome, DispatchError> {
        let definition = self
            .tool_spec
            .get(&call.tool_name)
            .ok_or_else(|| DispatchError::UnknownTool(call.tool_name.clone()))?;

        let call = DefaultToolValidator.validate(call, definition)?;

        debug!(tool = %call.tool_name, "dispatching tool call");

        let outcome = match call.tool_name.as_str() {
            fs::READ_LOCAL_FILE => fs::execute_read_local_file(&call),
            fs::LIST_DIRECTORY => fs::execute_list_directory(&call),
            name => match ModelTarget::find(name) {
                Some(target) => {
                    model::execute_model_tool(self.gateway.as_ref(), target, &call).await
                }
                None => {
                    // Catalog names a tool this dispatcher cannot route.
                    return Err(DispatchError::Internal(format!(
                        "tool '{}' has no handler",
                        name
                    )));
                }
            },
        };

        Ok(outcome)
    }
}
