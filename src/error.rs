//! Error types for building and serializing markup
//!
//! Every fault in this crate is a caller error surfaced immediately. Nothing is retried and
//! nothing is silently skipped.

use std::fmt;

/// Errors produced while building a node tree or writing markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The operation is not available on this node variant
    /// (appending to an empty element, reading the tag of a fragment, ...)
    Unsupported(String),
    /// The streaming writer closed a different tag than the caller expected
    MismatchedEndTag { expected: String, actual: String },
    /// A dynamically typed child was neither text nor a node
    UnexpectedChild(String),
    /// An attribute with an empty name reached the output
    EmptyAttributeName,
    /// A document description object did not match any node shape
    InvalidDescription(String),
    /// No format registered under this name
    FormatNotFound(String),
    /// Document description text could not be parsed
    Parse(String),
    /// The output sink rejected a write
    Write(fmt::Error),
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::Unsupported(msg) => write!(f, "Unsupported operation: {}", msg),
            MarkupError::MismatchedEndTag { expected, actual } => write!(
                f,
                "Mismatched end tag: expected={}, actual={}",
                expected, actual
            ),
            MarkupError::UnexpectedChild(kind) => write!(f, "Unexpected child type: {}", kind),
            MarkupError::EmptyAttributeName => write!(f, "Attribute name must not be empty"),
            MarkupError::InvalidDescription(msg) => {
                write!(f, "Invalid document description: {}", msg)
            }
            MarkupError::FormatNotFound(name) => write!(f, "Format '{}' not found", name),
            MarkupError::Parse(msg) => write!(f, "Parse error: {}", msg),
            MarkupError::Write(err) => write!(f, "Write error: {}", err),
        }
    }
}

impl std::error::Error for MarkupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarkupError::Write(err) => Some(err),
            _ => None,
        }
    }
}

impl From<fmt::Error> for MarkupError {
    fn from(err: fmt::Error) -> Self {
        MarkupError::Write(err)
    }
}
