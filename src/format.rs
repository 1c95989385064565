//! Format trait definition
//!
//! A format turns a node tree into text. Formats are looked up by name through the
//! [`FormatRegistry`](crate::registry::FormatRegistry).

use crate::ast::Node;
use crate::error::MarkupError;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn serialize(&self, root: &Node) -> Result<String, MarkupError> {
///         Ok(format!("{}!", root.kind().to_uppercase()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g. "html", "xhtml")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Serialize a tree into text
    fn serialize(&self, root: &Node) -> Result<String, MarkupError>;
}
