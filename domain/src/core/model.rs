//! Model target table
//!
//! Maps each tool-facing model alias to the identifier sent over the wire
//! and the name used in human-readable messages. The table is fixed at
//! compile time; the tool catalog is generated from it, one tool per entry.

/// Sampling temperature applied when a caller omits `temperature`.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// A chat model reachable through the completion gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelTarget {
    /// Tool-facing alias; doubles as the tool name (e.g. "claude")
    pub public_name: &'static str,
    /// Identifier sent to the backend (e.g. "claudeopus")
    pub wire_model_id: &'static str,
    /// Name shown in human-readable messages (e.g. "Claude Opus")
    pub display_name: &'static str,
}

/// The five models exposed as tools.
pub const MODEL_TARGETS: [ModelTarget; 5] = [
    ModelTarget {
        public_name: "gpt5",
        wire_model_id: "gpt-5-chat",
        display_name: "GPT-5",
    },
    ModelTarget {
        public_name: "gpt41",
        wire_model_id: "gpt-4.1",
        display_name: "GPT-4.1",
    },
    ModelTarget {
        public_name: "kimi",
        wire_model_id: "kimi-k2",
        display_name: "Kimi-K2",
    },
    ModelTarget {
        public_name: "claude",
        wire_model_id: "claudeopus",
        display_name: "Claude Opus",
    },
    ModelTarget {
        public_name: "glm",
        wire_model_id: "glm-4.5",
        display_name: "GLM-4.5",
    },
];

impl ModelTarget {
    /// Look up a target by its tool-facing alias.
    pub fn find(public_name: &str) -> Option<&'static ModelTarget> {
        MODEL_TARGETS.iter().find(|t| t.public_name == public_name)
    }
}

impl std::fmt::Display for ModelTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_find_known_target() {
        let target = ModelTarget::find("claude").unwrap();
        assert_eq!(target.wire_model_id, "claudeopus");
        assert_eq!(target.display_name, "Claude Opus");
    }

    #[test]
    fn test_find_unknown_target() {
        assert!(ModelTarget::find("gpt6").is_none());
        assert!(ModelTarget::find("").is_none());
    }

    #[test]
    fn test_public_names_are_unique() {
        let names: HashSet<&str> = MODEL_TARGETS.iter().map(|t| t.public_name).collect();
        assert_eq!(names.len(), MODEL_TARGETS.len());
    }

    #[test]
    fn test_display_uses_display_name() {
        let target = ModelTarget::find("gpt41").unwrap();
        assert_eq!(target.to_string(), "GPT-4.1");
    }
}
