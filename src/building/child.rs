//! Heterogeneous child arguments
//!
//! Builders accept a mix of plain strings and nodes. [`Child`] is that argument type, and
//! [`coalesce`] turns a list of them into nodes, merging runs of adjacent strings into one
//! multi-line [`Text`].

use crate::ast::{CData, Comment, Declaration, Element, Fragment, Node, ProcessingInstruction, Text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Text(String),
    Node(Node),
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Child::Text(value.to_string())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Child::Text(value)
    }
}

impl From<&String> for Child {
    fn from(value: &String) -> Self {
        Child::Text(value.clone())
    }
}

impl From<Node> for Child {
    fn from(value: Node) -> Self {
        Child::Node(value)
    }
}

macro_rules! child_from_node {
    ($($kind:ty),*) => {
        $(
            impl From<$kind> for Child {
                fn from(value: $kind) -> Self {
                    Child::Node(Node::from(value))
                }
            }
        )*
    };
}

child_from_node!(
    Element,
    Fragment,
    Text,
    Comment,
    CData,
    ProcessingInstruction,
    Declaration
);

/// Convert children to nodes. Adjacent strings become one [`Text`] with one entry each.
pub(crate) fn coalesce<I, C>(children: I) -> Vec<Node>
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    let mut nodes = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for child in children {
        match child.into() {
            Child::Text(text) => pending.push(text),
            Child::Node(node) => {
                if !pending.is_empty() {
                    nodes.push(Node::Text(Text::lines(std::mem::take(&mut pending))));
                }
                nodes.push(node);
            }
        }
    }
    if !pending.is_empty() {
        nodes.push(Node::Text(Text::lines(pending)));
    }
    nodes
}
