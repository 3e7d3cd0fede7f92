//! Local filesystem tools: read_local_file, list_directory
//!
//! Paths resolve against the process working directory and may reference
//! any location the process can reach; that trust boundary belongs to the
//! caller. Every I/O failure is contained in the outcome text.

use relay_domain::{ToolCall, ToolDefinition, ToolOutcome, ToolParameter};
use std::fs;
use std::path::{Path, PathBuf};

/// Tool name constants
pub const READ_LOCAL_FILE: &str = "read_local_file";
pub const LIST_DIRECTORY: &str = "list_directory";

/// Get the tool definition for read_local_file
pub fn read_local_file_definition() -> ToolDefinition {
    ToolDefinition::new(READ_LOCAL_FILE, "Read the contents of a local file").with_parameter(
        ToolParameter::new("filepath", "Path to the file to read", true).with_type("path"),
    )
}

/// Get the tool definition for list_directory
pub fn list_directory_definition() -> ToolDefinition {
    ToolDefinition::new(LIST_DIRECTORY, "List the contents of a directory").with_parameter(
        ToolParameter::new("dirpath", "Path to the directory", false)
            .with_type("path")
            .with_default("."),
    )
}

/// Resolve a possibly-relative path against the process working directory.
fn resolve(path: &str) -> std::io::Result<PathBuf> {
    std::path::absolute(Path::new(path))
}

/// Execute the read_local_file tool
pub fn execute_read_local_file(call: &ToolCall) -> ToolOutcome {
    let path_str = match call.require_string("filepath") {
        Ok(p) => p,
        Err(e) => return ToolOutcome::failure(e),
    };

    match resolve(path_str).and_then(fs::read_to_string) {
        Ok(content) => {
            ToolOutcome::success(format!("File: {}\n```\n{}\n```", path_str, content))
        }
        Err(e) => ToolOutcome::failure(format!("Failed to read {}: {}", path_str, e)),
    }
}

/// Execute the list_directory tool
pub fn execute_list_directory(call: &ToolCall) -> ToolOutcome {
    let path_str = call.get_string("dirpath").unwrap_or(".");

    match list_entries(path_str) {
        Ok(listing) => ToolOutcome::success(format!("Directory: {}\n\n{}", path_str, listing)),
        Err(e) => ToolOutcome::failure(format!("Failed to list {}: {}", path_str, e)),
    }
}

/// Direct children only, sorted by name, one tagged line per entry.
fn list_entries(path_str: &str) -> std::io::Result<String> {
    let path = resolve(path_str)?;

    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        entries.push((entry.file_name().to_string_lossy().into_owned(), is_dir));
    }
    entries.sort();

    let lines: Vec<String> = entries
        .into_iter()
        .map(|(name, is_dir)| {
            let tag = if is_dir { "[DIR]" } else { "[FILE]" };
            format!("{} {}", tag, name)
        })
        .collect();

    Ok(lines.join("\n"))
}
