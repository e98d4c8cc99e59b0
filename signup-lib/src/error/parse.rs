//! Errors for textual field and event names

/// The given name is not a form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field '{name}'")]
pub struct ParseFieldError {
    pub name: String,
}

impl ParseFieldError {
    /// Creates a new unknown field error.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The given name is not an event kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown event '{name}' (expected input, blur or change)")]
pub struct ParseEventError {
    pub name: String,
}

impl ParseEventError {
    /// Creates a new unknown event error.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
