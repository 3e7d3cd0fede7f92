//! Infrastructure layer for model-relay
//!
//! This crate contains the adapters that implement the domain ports:
//! environment configuration, the HTTP completion client, local
//! filesystem tools, the dispatcher, and the MCP stdio transport.

pub mod completion;
pub mod config;
pub mod mcp;
pub mod tools;

// Re-export commonly used types
pub use completion::HttpCompletionClient;
pub use config::{ConfigError, ConfigLoader, RelayConfig};
pub use mcp::McpServer;
pub use tools::{LocalToolDispatcher, default_tool_spec};
