//! Elements and fragments, the two node kinds that own children
//!
//! Attaching follows one contract everywhere: an ordinary node is appended, a fragment is
//! replaced by its children (recursively, so nested fragments flatten). Plain strings handed
//! over together in one call coalesce into a single multi-line [`Text`](super::Text).

use super::attributes::Attributes;
use super::node::Node;
use crate::building::child::{coalesce, Child};
use crate::error::MarkupError;
use serde::Serialize;
use std::fmt::Display;

/// Append `node` to `list`, splicing fragments in place
pub(crate) fn attach(list: &mut Vec<Node>, node: Node) {
    match node {
        Node::Fragment(fragment) => {
            for child in fragment.children {
                attach(list, child);
            }
        }
        other => list.push(other),
    }
}

fn attach_all<I, C>(list: &mut Vec<Node>, children: I)
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    for node in coalesce(children) {
        attach(list, node);
    }
}

/// A tagged node with attributes.
///
/// `children` is `None` for the empty-element variant, which rejects every append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    tag: String,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    attributes: Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Node>>,
}

impl Element {
    /// An element that accepts children
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Some(Vec::new()),
        }
    }

    /// An element that never has children
    pub fn empty(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: None,
        }
    }

    pub fn with_children<I, C>(tag: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let mut list = Vec::new();
        attach_all(&mut list, children);
        Element {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Some(list),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Append one attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.attributes = self.attributes.add(name, value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").and_then(|attr| attr.value())
    }

    pub fn is_empty_element(&self) -> bool {
        self.children.is_none()
    }

    /// Children in order, always empty for the empty-element variant
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn append(&mut self, node: impl Into<Node>) -> Result<&mut Self, MarkupError> {
        let list = self.child_list()?;
        attach(list, node.into());
        Ok(self)
    }

    pub fn append_all<I, C>(&mut self, children: I) -> Result<&mut Self, MarkupError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let list = self.child_list()?;
        attach_all(list, children);
        Ok(self)
    }

    /// Consuming form of [`append`](Self::append) for builder chains
    pub fn child(mut self, node: impl Into<Node>) -> Result<Self, MarkupError> {
        self.append(node)?;
        Ok(self)
    }

    fn child_list(&mut self) -> Result<&mut Vec<Node>, MarkupError> {
        match self.children.as_mut() {
            Some(list) => Ok(list),
            None => Err(MarkupError::Unsupported(format!(
                "<{}> is an empty element and cannot have children",
                self.tag
            ))),
        }
    }
}

/// Invisible grouping node. Attaching a fragment splices its children into the parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragment {
    children: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children<I, C>(children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let mut fragment = Fragment::new();
        fragment.extend(children);
        fragment
    }

    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        attach(&mut self.children, node.into());
        self
    }

    pub fn extend<I, C>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        attach_all(&mut self.children, children);
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Comment, Text};
    use crate::children;

    #[test]
    fn test_append_to_empty_element_fails() {
        let mut br = Element::empty("br");
        let err = br.append(Text::new("x")).unwrap_err();
        match err {
            MarkupError::Unsupported(msg) => assert!(msg.contains("<br>")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(br.append_all(children!["x"]).is_err());
    }

    #[test]
    fn test_fragment_children_are_spliced() {
        let mut fragment = Fragment::new();
        fragment.push(Element::new("a")).push(Element::new("b"));

        let mut div = Element::new("div");
        div.append(fragment).unwrap();

        let tags: Vec<_> = div
            .children()
            .iter()
            .map(|child| child.tag().unwrap())
            .collect();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn test_nested_fragments_flatten() {
        let inner = Fragment::with_children(children![Element::new("b"), Element::new("c")]);
        let outer = Fragment::with_children(children![Element::new("a"), inner]);
        assert_eq!(outer.len(), 3);
        assert!(outer
            .children()
            .iter()
            .all(|child| matches!(child, Node::Element(_))));
    }

    #[test]
    fn test_adjacent_strings_coalesce_into_one_text() {
        let p = Element::with_children("p", children!["a", "b", Comment::new("c"), "d"]);
        assert_eq!(p.children().len(), 3);
        match &p.children()[0] {
            Node::Text(text) => assert_eq!(text.content(), ["a".to_string(), "b".to_string()]),
            other => panic!("expected text, got {}", other.kind()),
        }
    }

    #[test]
    fn test_separate_appends_do_not_coalesce() {
        let mut p = Element::new("p");
        p.append_all(["a"]).unwrap().append_all(["b"]).unwrap();
        assert_eq!(p.children().len(), 2);
    }

    #[test]
    fn test_id_and_attr() {
        let div = Element::new("div").attr("id", "x").attr("title", 3);
        assert_eq!(div.id(), Some("x"));
        assert_eq!(div.attributes().len(), 2);
        assert!(!div.has_children());
    }
}
