//! Tool implementations and the dispatcher
//!
//! The catalog pairs each tool name with a definition and an executor:
//! five chat-model proxies generated from the model target table, plus
//! two local filesystem tools.

pub mod fs;
pub mod model;

mod dispatcher;

pub use dispatcher::LocalToolDispatcher;

use relay_domain::{MODEL_TARGETS, ToolSpec};

/// Build the complete tool catalog.
///
/// Pure and deterministic: every call yields the same seven definitions.
pub fn default_tool_spec() -> ToolSpec {
    let mut spec = ToolSpec::new();
    for target in &MODEL_TARGETS {
        spec = spec.register(model::model_tool_definition(target));
    }
    spec.register(fs::read_local_file_definition())
        .register(fs::list_directory_definition())
}
