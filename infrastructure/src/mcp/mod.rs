//! MCP stdio transport
//!
//! Newline-delimited JSON-RPC 2.0 over stdin/stdout.

pub mod protocol;
pub mod server;

pub use server::McpServer;
