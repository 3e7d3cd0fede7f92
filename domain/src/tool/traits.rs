//! Tool call validation
//!
//! Pure domain logic: checks an incoming call against its declared
//! definition and produces a normalized call with defaults filled in.
//! No I/O operations.

use thiserror::Error;

use super::entities::{ToolCall, ToolDefinition};

/// A schema violation in an incoming tool call.
///
/// These abort the call at the protocol level; they are never embedded in
/// tool output. The calling client is expected to send conformant input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required parameter '{name}' for tool '{tool}'")]
    MissingParameter { tool: String, name: String },

    #[error("parameter '{name}' of tool '{tool}' must be a {expected}")]
    TypeMismatch {
        tool: String,
        name: String,
        expected: &'static str,
    },
}

/// Validator for tool calls
pub trait ToolValidator {
    /// Validate a tool call against its definition.
    ///
    /// On success the returned call carries exactly the declared parameters:
    /// supplied values are type-checked, omitted optional parameters receive
    /// their declared default, and unknown fields are dropped so that
    /// callers running a newer schema revision keep working.
    fn validate(
        &self,
        call: &ToolCall,
        definition: &ToolDefinition,
    ) -> Result<ToolCall, ValidationError>;
}

/// Default implementation of ToolValidator
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(
        &self,
        call: &ToolCall,
        definition: &ToolDefinition,
    ) -> Result<ToolCall, ValidationError> {
        let mut normalized = ToolCall::new(&call.tool_name);

        for param in &definition.parameters {
            match call.arguments.get(&param.name) {
                Some(value) => {
                    let expected = expected_type(&param.param_type);
                    if !type_matches(value, &param.param_type) {
                        return Err(ValidationError::TypeMismatch {
                            tool: definition.name.clone(),
                            name: param.name.clone(),
                            expected,
                        });
                    }
                    normalized
                        .arguments
                        .insert(param.name.clone(), value.clone());
                }
                None if param.required => {
                    return Err(ValidationError::MissingParameter {
                        tool: definition.name.clone(),
                        name: param.name.clone(),
                    });
                }
                None => {
                    if let Some(default) = &param.default {
                        normalized
                            .arguments
                            .insert(param.name.clone(), default.clone());
                    }
                }
            }
        }

        Ok(normalized)
    }
}

fn type_matches(value: &serde_json::Value, param_type: &str) -> bool {
    match param_type {
        "string" | "path" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        _ => true,
    }
}

fn expected_type(param_type: &str) -> &'static str {
    match param_type {
        "string" | "path" => "string",
        "number" => "number",
        "integer" => "integer",
        "boolean" => "boolean",
        _ => "string",
    }
}
