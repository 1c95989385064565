//! Node model
//!
//! A document is a tree of [`Node`]s. Ownership is strictly tree shaped: a node is attached
//! to at most one parent, and there are no back references. The empty-element variant is an
//! [`Element`] whose child list is `None`.

pub mod attributes;
pub mod content;
pub mod element;
pub mod node;

pub use attributes::{AttrItem, Attribute, Attributes};
pub use content::{CData, Comment, Declaration, ProcessingInstruction, Text};
pub use element::{Element, Fragment};
pub use node::Node;
