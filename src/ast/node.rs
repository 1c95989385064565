//! The closed set of node kinds

use super::attributes::Attributes;
use super::content::{CData, Comment, Declaration, ProcessingInstruction, Text};
use super::element::{Element, Fragment};
use crate::error::MarkupError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Fragment(Fragment),
    Text(Text),
    Comment(Comment),
    #[serde(rename = "cdata")]
    CData(CData),
    ProcessingInstruction(ProcessingInstruction),
    Declaration(Declaration),
    LineBreak,
}

impl Node {
    /// Stable name of the node kind, used in messages
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Element(element) if element.is_empty_element() => "EmptyElement",
            Node::Element(_) => "Element",
            Node::Fragment(_) => "Fragment",
            Node::Text(_) => "Text",
            Node::Comment(_) => "Comment",
            Node::CData(_) => "CData",
            Node::ProcessingInstruction(_) => "ProcessingInstruction",
            Node::Declaration(_) => "Declaration",
            Node::LineBreak => "LineBreak",
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn tag(&self) -> Result<&str, MarkupError> {
        self.as_element()
            .map(Element::tag)
            .ok_or_else(|| self.unsupported("tag"))
    }

    pub fn attributes(&self) -> Result<&Attributes, MarkupError> {
        self.as_element()
            .map(Element::attributes)
            .ok_or_else(|| self.unsupported("attributes"))
    }

    /// Children of elements and fragments, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => element.children(),
            Node::Fragment(fragment) => fragment.children(),
            _ => &[],
        }
    }

    fn unsupported(&self, what: &str) -> MarkupError {
        MarkupError::Unsupported(format!("{} has no {}", self.kind(), what))
    }
}

macro_rules! node_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Node {
                fn from(value: $variant) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

node_from!(
    Element,
    Fragment,
    Text,
    Comment,
    CData,
    ProcessingInstruction,
    Declaration
);
