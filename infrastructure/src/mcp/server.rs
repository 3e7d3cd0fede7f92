//! MCP stdio server loop
//!
//! Reads newline-delimited JSON-RPC requests, dispatches tool calls, and
//! writes one response line per request. Each request is handled
//! independently on receipt; no state is shared between invocations.

use std::sync::Arc;

use relay_domain::{DispatchError, ToolCall, ToolExecutorPort};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, trace, warn};

use super::protocol::{
    self, CallToolParams, CallToolResult, IncomingMessage, OutgoingResponse, ToolDescriptor,
};

/// Serves the tool-invocation protocol over a line-delimited JSON stream.
pub struct McpServer {
    executor: Arc<dyn ToolExecutorPort>,
}

impl McpServer {
    pub fn new(executor: Arc<dyn ToolExecutorPort>) -> Self {
        Self { executor }
    }

    /// Read requests until EOF, writing one response line per request.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = BufReader::new(reader).lines();

        info!("serving tool requests");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(&line).await {
                let serialized = serde_json::to_string(&response).map_err(std::io::Error::other)?;
                writer.write_all(serialized.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        info!("input stream closed, shutting down");
        Ok(())
    }

    /// Handle one raw message; `None` means no response is owed.
    pub async fn handle_message(&self, raw: &str) -> Option<OutgoingResponse> {
        let message: IncomingMessage = match serde_json::from_str(raw) {
            Ok(m) => m,
            Err(e) => {
                warn!(error = %e, "received unparseable message");
                return Some(OutgoingResponse::error(
                    Value::Null,
                    protocol::PARSE_ERROR,
                    format!("parse error: {}", e),
                ));
            }
        };

        let Some(id) = message.id else {
            // Notifications (initialized, cancelled, ...) get no reply.
            trace!(method = %message.method, "ignoring notification");
            return None;
        };

        Some(self.handle_request(id, &message.method, message.params).await)
    }

    async fn handle_request(
        &self,
        id: Value,
        method: &str,
        params: Option<Value>,
    ) -> OutgoingResponse {
        debug!(%method, "handling request");

        match method {
            "initialize" => OutgoingResponse::success(id, protocol::initialize_result()),
            "ping" => OutgoingResponse::success(id, serde_json::json!({})),
            "tools/list" => {
                let tools = ToolDescriptor::from_spec(self.executor.tool_spec());
                OutgoingResponse::success(id, serde_json::json!({ "tools": tools }))
            }
            "tools/call" => self.handle_tool_call(id, params).await,
            other => OutgoingResponse::error(
                id,
                protocol::METHOD_NOT_FOUND,
                format!("method not found: {}", other),
            ),
        }
    }

    async fn handle_tool_call(&self, id: Value, params: Option<Value>) -> OutgoingResponse {
        let params: CallToolParams = match params.map(serde_json::from_value).transpose() {
            Ok(Some(p)) => p,
            Ok(None) => {
                return OutgoingResponse::error(id, protocol::INVALID_PARAMS, "missing params");
            }
            Err(e) => {
                return OutgoingResponse::error(
                    id,
                    protocol::INVALID_PARAMS,
                    format!("invalid params: {}", e),
                );
            }
        };

        let mut call = ToolCall::new(&params.name);
        call.arguments = params.arguments.into_iter().collect();

        match self.executor.execute(&call).await {
            // Success and contained failures share the envelope shape.
            Ok(outcome) => OutgoingResponse::success(
                id,
                serde_json::json!(CallToolResult::text(outcome.into_text())),
            ),
            Err(e @ DispatchError::UnknownTool(_)) => {
                warn!(tool = %params.name, "call to unknown tool");
                OutgoingResponse::error(id, protocol::METHOD_NOT_FOUND, e.to_string())
            }
            Err(e @ DispatchError::InvalidArguments(_)) => {
                OutgoingResponse::error(id, protocol::INVALID_PARAMS, e.to_string())
            }
            Err(e @ DispatchError::Internal(_)) => {
                error!(tool = %params.name, error = %e, "tool call failed internally");
                OutgoingResponse::error(id, protocol::INTERNAL_ERROR, e.to_string())
            }
        }
    }
}
