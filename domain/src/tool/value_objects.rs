//! Tool domain value objects
//!
//! [`ToolOutcome`] is the handler-boundary result. Both variants flatten
//! into the same text envelope on the wire: a failed remote call or file
//! operation is reported to the caller as descriptive text inside an
//! otherwise-successful response, so one bad call never aborts the
//! conversation the caller is driving. The variant survives here so tests
//! can assert on the cause of an embedded error.

/// Outcome of a tool handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The handler produced its result text.
    Success(String),
    /// The handler failed; the text describes the error for the caller.
    DomainFailure(String),
}

impl ToolOutcome {
    /// Create a successful outcome
    pub fn success(text: impl Into<String>) -> Self {
        ToolOutcome::Success(text.into())
    }

    /// Create a contained failure
    pub fn failure(text: impl Into<String>) -> Self {
        ToolOutcome::DomainFailure(text.into())
    }

    /// Check if the handler succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Success(_))
    }

    /// The text that goes into the envelope, regardless of variant
    pub fn text(&self) -> &str {
        match self {
            ToolOutcome::Success(text) | ToolOutcome::DomainFailure(text) => text,
        }
    }

    /// Consume the outcome, yielding the envelope text
    pub fn into_text(self) -> String {
        match self {
            ToolOutcome::Success(text) | ToolOutcome::DomainFailure(text) => text,
        }
    }
}
