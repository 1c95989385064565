//! Document descriptions
//!
//! A description is a JSON or YAML value that spells out a node tree:
//!
//! - a string is text
//! - an array is a fragment
//! - an object is one node:
//!     - `{"tag": "div", "attrs": .., "children": [..], "empty": false, "linebreaks": false}`,
//!       where `empty` defaults to whether the tag is void (`br`, `img`, `input`, ..)
//!     - `{"comment": "text"}` or `{"comment": ["line", "line"]}`, same for `cdata`
//!     - `{"pi": {"target": "xml", "text": ".."}}`
//!     - `{"declaration": {"name": "DOCTYPE", "content": "html"}}` or `{"doctype": "html"}`
//!     - `{"lb": true}`
//!     - `{"fragment": [..]}`
//!
//! `attrs` is either an object (values may be strings, numbers or booleans; `null` makes a
//! valueless attribute) or an array of `[name, value]` / `[name]` pairs where the string
//! `"lb"` inserts a line break.

use super::child::Child;
use crate::ast::{
    Attribute, Attributes, CData, Comment, Declaration, Element, Fragment, Node,
    ProcessingInstruction, Text,
};
use crate::error::MarkupError;
use crate::tags::classify;
use log::debug;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionFormat {
    #[default]
    Json,
    Yaml,
}

impl DescriptionFormat {
    /// Guess from a file extension, `None` when it is neither JSON nor YAML
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(DescriptionFormat::Json),
            "yaml" | "yml" => Some(DescriptionFormat::Yaml),
            _ => None,
        }
    }
}

impl FromStr for DescriptionFormat {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DescriptionFormat::Json),
            "yaml" | "yml" => Ok(DescriptionFormat::Yaml),
            other => Err(MarkupError::Parse(format!(
                "unknown description format '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for DescriptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptionFormat::Json => write!(f, "json"),
            DescriptionFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Parse description text and build the tree it describes
pub fn load_str(source: &str, format: DescriptionFormat) -> Result<Node, MarkupError> {
    let value: Value = match format {
        DescriptionFormat::Json => {
            serde_json::from_str(source).map_err(|e| MarkupError::Parse(e.to_string()))?
        }
        DescriptionFormat::Yaml => {
            serde_yaml::from_str(source).map_err(|e| MarkupError::Parse(e.to_string()))?
        }
    };
    debug!("loaded {} description ({} bytes)", format, source.len());
    from_value(&value)
}

/// Build a node from an already parsed description
pub fn from_value(value: &Value) -> Result<Node, MarkupError> {
    match value {
        Value::String(text) => Ok(Node::Text(Text::new(text.as_str()))),
        Value::Array(items) => Ok(Node::Fragment(fragment(items)?)),
        Value::Object(map) => object_node(map),
        other => Err(unexpected(other)),
    }
}

fn unexpected(value: &Value) -> MarkupError {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    MarkupError::UnexpectedChild(kind.to_string())
}

fn children(items: &[Value]) -> Result<Vec<Child>, MarkupError> {
    items
        .iter()
        .map(|item| match item {
            Value::String(text) => Ok(Child::Text(text.clone())),
            other => from_value(other).map(Child::Node),
        })
        .collect()
}

fn fragment(items: &[Value]) -> Result<Fragment, MarkupError> {
    Ok(Fragment::with_children(children(items)?))
}

fn object_node(map: &Map<String, Value>) -> Result<Node, MarkupError> {
    if let Some(tag) = map.get("tag") {
        return element(tag, map).map(Node::Element);
    }
    if let Some(content) = map.get("comment") {
        return Ok(Node::Comment(Comment::lines(strings(content, "comment")?)));
    }
    if let Some(content) = map.get("cdata") {
        return Ok(Node::CData(CData::lines(strings(content, "cdata")?)));
    }
    if let Some(pi) = map.get("pi") {
        let target = string_field(pi, "target")?;
        let text = match pi.get("text") {
            Some(value) => single_string(value, "pi text")?,
            None => String::new(),
        };
        return Ok(Node::ProcessingInstruction(ProcessingInstruction::new(
            target, text,
        )));
    }
    if let Some(decl) = map.get("declaration") {
        let name = string_field(decl, "name")?;
        let content = match decl.get("content") {
            Some(value) => strings(value, "declaration content")?,
            None => Vec::new(),
        };
        return Ok(Node::Declaration(Declaration::new(name, content)));
    }
    if let Some(doctype) = map.get("doctype") {
        let content = single_string(doctype, "doctype")?;
        return Ok(Node::Declaration(Declaration::new("DOCTYPE", [content])));
    }
    if let Some(lb) = map.get("lb") {
        return match lb {
            Value::Bool(true) => Ok(Node::LineBreak),
            _ => Err(MarkupError::InvalidDescription(
                "`lb` must be `true`".to_string(),
            )),
        };
    }
    if let Some(items) = map.get("fragment") {
        return match items {
            Value::Array(items) => Ok(Node::Fragment(fragment(items)?)),
            _ => Err(MarkupError::InvalidDescription(
                "`fragment` must be an array".to_string(),
            )),
        };
    }

    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    Err(MarkupError::InvalidDescription(format!(
        "object with keys [{}] is not a node",
        keys.join(", ")
    )))
}

fn element(tag: &Value, map: &Map<String, Value>) -> Result<Element, MarkupError> {
    let tag = single_string(tag, "tag")?;
    // void tags default to empty so that children on them are rejected
    let is_empty = optional_flag(map, "empty")?.unwrap_or_else(|| classify(&tag).empty);
    let line_break = optional_flag(map, "linebreaks")?.unwrap_or(false);

    let mut attributes = if line_break {
        Attributes::line_broken()
    } else {
        Attributes::new()
    };
    if let Some(attrs) = map.get("attrs") {
        add_attributes(&mut attributes, attrs)?;
    }

    let mut element = if is_empty {
        Element::empty(tag)
    } else {
        Element::new(tag)
    }
    .with_attributes(attributes);

    match map.get("children") {
        None => {}
        Some(Value::Array(items)) => {
            element.append_all(children(items)?)?;
        }
        Some(Value::String(text)) => {
            element.append_all([text.as_str()])?;
        }
        Some(other) => {
            element.append(from_value(other)?)?;
        }
    }
    Ok(element)
}

fn add_attributes(attributes: &mut Attributes, attrs: &Value) -> Result<(), MarkupError> {
    match attrs {
        Value::Object(map) => {
            for (name, value) in map {
                attributes.push(attribute(name, value)?);
            }
            Ok(())
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(marker) if marker == "lb" => attributes.push_break(),
                    Value::Array(pair) => match pair.as_slice() {
                        [Value::String(name)] => attributes.push(Attribute::flag(name.as_str())),
                        [Value::String(name), value] => attributes.push(attribute(name, value)?),
                        _ => {
                            return Err(MarkupError::InvalidDescription(
                                "attribute pairs must be [name] or [name, value]".to_string(),
                            ))
                        }
                    },
                    _ => {
                        return Err(MarkupError::InvalidDescription(
                            "attribute list entries must be pairs or \"lb\"".to_string(),
                        ))
                    }
                }
            }
            Ok(())
        }
        _ => Err(MarkupError::InvalidDescription(
            "`attrs` must be an object or an array".to_string(),
        )),
    }
}

fn attribute(name: &str, value: &Value) -> Result<Attribute, MarkupError> {
    match value {
        Value::Null => Ok(Attribute::flag(name)),
        Value::String(text) => Ok(Attribute::new(name, text)),
        Value::Number(number) => Ok(Attribute::new(name, number)),
        Value::Bool(flag) => Ok(Attribute::new(name, flag)),
        _ => Err(MarkupError::InvalidDescription(format!(
            "attribute '{}' must have a scalar value",
            name
        ))),
    }
}

fn optional_flag(map: &Map<String, Value>, key: &str) -> Result<Option<bool>, MarkupError> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(_) => Err(MarkupError::InvalidDescription(format!(
            "`{}` must be a boolean",
            key
        ))),
    }
}

fn single_string(value: &Value, what: &str) -> Result<String, MarkupError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        _ => Err(MarkupError::InvalidDescription(format!(
            "{} must be a string",
            what
        ))),
    }
}

fn string_field(value: &Value, key: &str) -> Result<String, MarkupError> {
    match value.get(key) {
        Some(field) => single_string(field, key),
        None => Err(MarkupError::InvalidDescription(format!(
            "missing `{}`",
            key
        ))),
    }
}

fn strings(value: &Value, what: &str) -> Result<Vec<String>, MarkupError> {
    match value {
        Value::String(text) => Ok(vec![text.clone()]),
        Value::Array(items) => items.iter().map(|item| single_string(item, what)).collect(),
        _ => Err(MarkupError::InvalidDescription(format!(
            "{} must be a string or a list of strings",
            what
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AttrItem;
    use serde_json::json;

    #[test]
    fn test_element_with_attributes_and_children() {
        let node = from_value(&json!({
            "tag": "div",
            "attrs": {"id": "main", "tabindex": 2, "hidden": null},
            "children": ["a", "b", {"tag": "br", "empty": true}]
        }))
        .unwrap();

        let div = node.as_element().unwrap();
        assert_eq!(div.id(), Some("main"));
        assert_eq!(
            div.attributes().get("tabindex").and_then(|a| a.value()),
            Some("2")
        );
        assert_eq!(div.attributes().get("hidden").map(|a| a.value()), Some(None));
        // "a" and "b" coalesce into one two-line text
        assert_eq!(div.children().len(), 2);
        assert_eq!(div.children()[1].kind(), "EmptyElement");
    }

    #[test]
    fn test_attribute_array_with_breaks() {
        let node = from_value(&json!({
            "tag": "input",
            "empty": true,
            "attrs": [["type", "text"], "lb", ["name", "q"], ["required"]]
        }))
        .unwrap();
        let items = node.attributes().unwrap().items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1], AttrItem::Break);
    }

    #[test]
    fn test_number_child_is_unexpected() {
        let err = from_value(&json!({"tag": "p", "children": ["x", 42]})).unwrap_err();
        assert_eq!(err, MarkupError::UnexpectedChild("number".to_string()));

        let err = from_value(&json!([true])).unwrap_err();
        assert_eq!(err, MarkupError::UnexpectedChild("boolean".to_string()));
    }

    #[test]
    fn test_children_on_empty_element_fail() {
        let err = from_value(&json!({"tag": "br", "empty": true, "children": ["x"]})).unwrap_err();
        assert!(matches!(err, MarkupError::Unsupported(_)));
    }

    #[test]
    fn test_void_tags_are_empty_by_default() {
        assert_eq!(from_value(&json!({"tag": "br"})).unwrap().kind(), "EmptyElement");
        assert_eq!(from_value(&json!({"tag": "META"})).unwrap().kind(), "EmptyElement");
        assert_eq!(from_value(&json!({"tag": "div"})).unwrap().kind(), "Element");
    }

    #[test]
    fn test_children_on_void_tag_fail_without_empty_key() {
        let err = from_value(&json!({"tag": "br", "children": ["x"]})).unwrap_err();
        assert!(matches!(err, MarkupError::Unsupported(_)));

        let err = from_value(&json!({
            "tag": "img",
            "attrs": {"src": "a.png"},
            "children": [{"tag": "p", "children": "caption"}]
        }))
        .unwrap_err();
        assert!(matches!(err, MarkupError::Unsupported(_)));

        assert!(load_str(r#"{"tag": "br", "children": ["x"]}"#, DescriptionFormat::Json).is_err());
    }

    #[test]
    fn test_explicit_empty_overrides_tag_table() {
        let node = from_value(&json!({"tag": "br", "empty": false, "children": ["x"]})).unwrap();
        assert_eq!(node.kind(), "Element");
        assert_eq!(from_value(&json!({"tag": "div", "empty": true})).unwrap().kind(), "EmptyElement");
    }

    #[test]
    fn test_unknown_object_shape() {
        let err = from_value(&json!({"bogus": 1})).unwrap_err();
        assert!(matches!(err, MarkupError::InvalidDescription(msg) if msg.contains("bogus")));
    }

    #[test]
    fn test_special_nodes() {
        assert_eq!(
            from_value(&json!({"doctype": "html"})).unwrap(),
            Node::Declaration(Declaration::doctype())
        );
        assert_eq!(from_value(&json!({"lb": true})).unwrap(), Node::LineBreak);
        assert_eq!(from_value(&json!({"comment": ["a", "b"]})).unwrap().kind(), "Comment");
        let pi = from_value(&json!({"pi": {"target": "xml", "text": "version=\"1.0\""}})).unwrap();
        assert_eq!(pi.kind(), "ProcessingInstruction");
    }

    #[test]
    fn test_yaml_description() {
        let source = "tag: ul\nchildren:\n  - tag: li\n    children: one\n  - tag: li\n    children: two\n";
        let node = load_str(source, DescriptionFormat::Yaml).unwrap();
        assert_eq!(node.tag().unwrap(), "ul");
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_parse_error() {
        let err = load_str("{not json", DescriptionFormat::Json).unwrap_err();
        assert!(matches!(err, MarkupError::Parse(_)));
    }

    #[test]
    fn test_format_names() {
        assert_eq!("YAML".parse::<DescriptionFormat>().unwrap(), DescriptionFormat::Yaml);
        assert_eq!(DescriptionFormat::from_extension("yml"), Some(DescriptionFormat::Yaml));
        assert_eq!(DescriptionFormat::from_extension("txt"), None);
        assert!("toml".parse::<DescriptionFormat>().is_err());
    }
}
