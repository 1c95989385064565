//! Markup document model and formatting serializer
//!
//!     Build a tree of markup nodes in memory and write it out as readable, consistently
//!     indented HTML. Alternatively, skip the tree and stream the same markup call by call.
//!
//! Architecture
//!
//!     .
//!     ├── ast                 # Node model: elements, fragments, text, comments, attributes
//!     ├── building            # Constructors, the children! macro, JSON/YAML descriptions
//!     ├── tags.rs             # Tag table: block / void / preformatted / end tag required
//!     ├── escape.rs           # Attribute value and text content escaping
//!     ├── formats
//!     │   └── html
//!     │       ├── line_state.rs   # Line buffer, tag stack, indentation
//!     │       ├── serializer.rs   # Tree walk
//!     │       └── writer.rs       # Streaming writer
//!     ├── format.rs           # Format trait
//!     └── registry.rs         # Named formats (html, xhtml, html-compact)
//!
//!     Serializer and writer share the line state, so the same structure produces the same
//!     text through either path.
//!
//! Formatting
//!
//!     Block-level tags get their own lines. Inline tags flow inside the current line.
//!     Preformatted tags (pre, script, style, textarea) switch indentation off for their
//!     whole subtree. Childless elements are written as `<tag></tag>`, or `<tag/>` with end-tag
//!     elision on; void tags are always written as `<tag>`.
//!
//!     Text is written as given. Escape it first with [`escape::esc_text`] or the
//!     [`building::html::esc`] constructor.
//!
//! This is a pure lib: it never touches the file system, the environment or stdio. The
//! tagtree-cli crate handles all of that.

pub mod ast;
pub mod building;
pub mod error;
pub mod escape;
pub mod format;
pub mod formats;
pub mod registry;
pub mod tags;

pub use ast::{
    AttrItem, Attribute, Attributes, CData, Comment, Declaration, Element, Fragment, Node,
    ProcessingInstruction, Text,
};
pub use building::{Child, DescriptionFormat};
pub use error::MarkupError;
pub use escape::{esc_attr, esc_text, esc_xml, quote_attr};
pub use format::Format;
pub use formats::html::{
    serialize, FormattingRules, Html5Serializer, HtmlFormat, HtmlWriter, WriterDialect,
};
pub use registry::FormatRegistry;
pub use tags::{classify, lookup, TagInfo};
